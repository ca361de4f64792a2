//! Krypto - A solver for the Krypto numbers puzzle
//!
//! Given an integer target and a hand of 3 to 5 cards, this library
//! enumerates every expression that combines all cards exactly once with
//! the four basic operators into the target value, and reduces the raw
//! stream to a deduplicated set of canonically simplified solutions.

pub mod deck;
pub mod node;
pub mod operate;
pub mod solver;

// Re-export the main public API
pub use node::Node;
pub use operate::{apply, Operator};
pub use solver::{ordered, simplify_all, solve, Solver, SolverError};

/// Find the distinct solutions for one puzzle
///
/// This is a convenience function that runs the full enumeration and the
/// simplification pass in one call.
///
/// # Arguments
///
/// * `target` - The value every solution must evaluate to
/// * `cards` - The puzzle's cards; 3, 4 or 5 of them
///
/// # Errors
///
/// Returns [`SolverError::WrongCardCount`] if `cards` does not hold
/// 3, 4 or 5 cards. An unsolvable puzzle is not an error: the returned
/// set is simply empty.
///
/// # Examples
///
/// ```
/// use krypto::solve_unique;
///
/// let solutions = solve_unique(6, &[1, 2, 3]).unwrap();
/// assert!(!solutions.is_empty());
/// for solution in &solutions {
///     assert_eq!(solution.value(), 6);
/// }
/// ```
pub fn solve_unique(
    target: i32,
    cards: &[i32],
) -> Result<std::collections::HashSet<Node>, SolverError> {
    Ok(simplify_all(solve(target, cards)?))
}
