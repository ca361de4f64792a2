//! Card-count solvers and the global simplification pass.
//!
//! [`solve`] is the sole entry point: it picks the solver for the hand's
//! arity and hands back a lazy iterator of solution trees. [`simplify_all`]
//! collapses such a stream into the set of distinct canonical solutions.

mod errors;
mod five;
mod four;
mod permutations;
mod three;

use std::collections::HashSet;

use log::info;

use crate::node::Node;

pub use errors::SolverError;
pub use five::FiveCardSolver;
pub use four::FourCardSolver;
pub use three::ThreeCardSolver;

/// A solver for one puzzle, dispatched on the number of cards. Single-pass:
/// each pull advances the internal mutation cursor until the next hit.
pub enum Solver {
    Three(ThreeCardSolver),
    Four(FourCardSolver),
    Five(FiveCardSolver),
}

impl Iterator for Solver {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        match self {
            Solver::Three(solver) => solver.next(),
            Solver::Four(solver) => solver.next(),
            Solver::Five(solver) => solver.next(),
        }
    }
}

/// Builds the solver for `cards`, which must hold 3, 4 or 5 cards.
///
/// Every yielded node evaluates to `target`. Exhaustion without a hit is
/// represented by the iterator simply ending, not by an error.
///
/// # Errors
///
/// Returns [`SolverError::WrongCardCount`] for any other card count.
pub fn solve(target: i32, cards: &[i32]) -> Result<Solver, SolverError> {
    match *cards {
        [c0, c1, c2] => Ok(Solver::Three(ThreeCardSolver::new(target, [c0, c1, c2]))),
        [c0, c1, c2, c3] => Ok(Solver::Four(FourCardSolver::new(target, [c0, c1, c2, c3]))),
        [c0, c1, c2, c3, c4] => Ok(Solver::Five(FiveCardSolver::new(
            target,
            [c0, c1, c2, c3, c4],
        ))),
        _ => Err(SolverError::WrongCardCount(cards.len())),
    }
}

/// Reduces raw solutions to the distinct canonical set.
///
/// Runs a global fixed point over the whole working set: every pass
/// re-simplifies every member into a fresh set, and the loop ends only
/// when a pass changes nothing. A later pass can expose flattening that
/// only becomes visible once sibling nodes have been normalized, so a
/// single per-node pass would not be enough.
pub fn simplify_all<I>(solutions: I) -> HashSet<Node>
where
    I: IntoIterator<Item = Node>,
{
    let mut current: HashSet<Node> = solutions.into_iter().collect();

    loop {
        let mut next = HashSet::with_capacity(current.len());
        let mut changed = false;

        for node in &current {
            let simple = node.simplify();
            changed |= simple != *node;
            next.insert(simple);
        }
        current = next;

        if !changed {
            break;
        }
    }

    info!("{} distinct solutions after simplification", current.len());
    current
}

/// Orders a solution set by ascending complexity for presentation, with
/// the rendered text as a deterministic tiebreak.
pub fn ordered(solutions: HashSet<Node>) -> Vec<Node> {
    let mut sorted: Vec<Node> = solutions.into_iter().collect();
    sorted.sort_by_key(|node| (node.complexity(), node.to_string()));
    sorted
}

#[cfg(test)]
mod tests;
