//! Exact-length solver for the missionaries and cannibals river crossing.
//!
//! Cannibals and missionaries must cross from the West bank to the East bank
//! in a boat of limited capacity without missionaries ever being outnumbered,
//! and the crossing must take exactly the requested number of trips. The
//! solver runs a randomized frontier search over cycle-free paths.

pub mod error;
pub mod path;
pub mod reporter;
pub mod solver;
pub mod state;

// Re-export main types
pub use error::{Result, SearchError, Termination};
pub use path::Path;
pub use reporter::{NoOpReporter, SearchReporter, StepReporter};
pub use solver::{find_safe_crossing, solve, SearchOutcome, SolverConfig};
pub use state::{BoatSide, Crossing, CrossingDirection, State};
