//! The fixed deck of Krypto cards and the random card supply.
//!
//! The solver itself never touches the deck; puzzle generation draws from
//! it. Values 1-10 appear three times, 11-19 twice, 20-25 once: 54 cards.

use rand::seq::SliceRandom;
use rand::thread_rng;

#[rustfmt::skip]
pub const ALL: [i32; 54] = [
    1, 1, 1,
    2, 2, 2,
    3, 3, 3,
    4, 4, 4,
    5, 5, 5,
    6, 6, 6,
    7, 7, 7,
    8, 8, 8,
    9, 9, 9,
    10, 10, 10,
    11, 11,
    12, 12,
    13, 13,
    14, 14,
    15, 15,
    16, 16,
    17, 17,
    18, 18,
    19, 19,
    20, 21, 22, 23, 24, 25,
];

/// Draws `count` cards from a freshly shuffled deck.
pub fn deal(count: usize) -> Vec<i32> {
    let mut shuffled = ALL;
    shuffled.shuffle(&mut thread_rng());
    shuffled.iter().take(count).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_holds_the_54_card_multiset() {
        assert_eq!(ALL.len(), 54);
        for value in 1..=10 {
            assert_eq!(ALL.iter().filter(|&&c| c == value).count(), 3);
        }
        for value in 11..=19 {
            assert_eq!(ALL.iter().filter(|&&c| c == value).count(), 2);
        }
        for value in 20..=25 {
            assert_eq!(ALL.iter().filter(|&&c| c == value).count(), 1);
        }
    }

    #[test]
    fn deal_draws_the_requested_hand_from_the_deck() {
        let hand = deal(5);
        assert_eq!(hand.len(), 5);
        for card in &hand {
            assert!(ALL.contains(card));
        }
    }

    #[test]
    fn deal_never_exceeds_a_card_multiplicity() {
        let hand = deal(54);
        let mut sorted = hand.clone();
        sorted.sort_unstable();
        let mut deck = ALL;
        deck.sort_unstable();
        assert_eq!(sorted, deck);
    }
}
