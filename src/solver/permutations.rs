//! Fixed permutation tables for the slot orders a solver drives.
//!
//! The index tables are generated once with Heap's algorithm. The five-card
//! solver additionally maps the index rows to card-value rows and drops
//! value-identical ones, so a hand with repeated cards is searched with
//! 60, 30, 20 or 10 rows instead of the full 120.

use std::collections::HashSet;

use once_cell::sync::Lazy;

pub(crate) static THREE: Lazy<Vec<[usize; 3]>> = Lazy::new(heap_permutations::<3>);
pub(crate) static FOUR: Lazy<Vec<[usize; 4]>> = Lazy::new(heap_permutations::<4>);
pub(crate) static FIVE: Lazy<Vec<[usize; 5]>> = Lazy::new(heap_permutations::<5>);

/// The distinct card-value rows for a five-card hand, in first-occurrence
/// order of the index table.
pub(crate) fn distinct_rows(cards: &[i32; 5]) -> Vec<[i32; 5]> {
    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    for permutation in FIVE.iter() {
        let row = [
            cards[permutation[0]],
            cards[permutation[1]],
            cards[permutation[2]],
            cards[permutation[3]],
            cards[permutation[4]],
        ];
        if seen.insert(row) {
            rows.push(row);
        }
    }
    rows
}

fn heap_permutations<const N: usize>() -> Vec<[usize; N]> {
    let mut slots: [usize; N] = std::array::from_fn(|i| i);
    let mut out = Vec::new();
    permute(&mut slots, N, &mut out);
    out
}

// Heap's algorithm.
fn permute<const N: usize>(slots: &mut [usize; N], size: usize, out: &mut Vec<[usize; N]>) {
    if size == 1 {
        out.push(*slots);
    }
    for i in 0..size {
        permute(slots, size - 1, out);
        let swapped = if size % 2 == 0 { i } else { 0 };
        slots.swap(swapped, size - 1);
    }
}
