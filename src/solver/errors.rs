use thiserror::Error;

/// Errors that can occur when constructing a solver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Wrong number of cards: expected 3, 4 or 5, got {0}")]
    WrongCardCount(usize),
}
