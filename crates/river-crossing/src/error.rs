//! Error types for the river crossing solver.

use thiserror::Error;

/// Why a search ended without producing a path of the requested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The iteration cap was reached with paths still waiting in the worklist
    IterationCap,
    /// Every cycle-free path was explored
    FrontierExhausted,
    /// The initial state already has a bank where missionaries are outnumbered
    UnsafeStart,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::IterationCap => write!(f, "iteration cap reached"),
            Termination::FrontierExhausted => write!(f, "search space exhausted"),
            Termination::UnsafeStart => write!(f, "initial state is unsafe"),
        }
    }
}

/// Main error type for solver operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No path of the requested length was found
    #[error("No solution found after {iterations} iterations: {reason}")]
    NoSolutionFound {
        iterations: usize,
        reason: Termination,
    },

    /// Terminal state requested from a path with no states
    #[error("Path has no states")]
    EmptyPath,

    /// Parameters the search cannot work with
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SearchError>;
