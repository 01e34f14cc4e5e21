//! Randomized frontier search for exact-length crossings.
//!
//! The search keeps a worklist of candidate paths. Each iteration takes the
//! path at the front, expands its terminal state, and inserts every extension
//! at a uniformly random position. The walk is neither breadth-first nor
//! depth-first, which lets it reach the goal with many different crossing
//! counts instead of always the shortest one. The first popped path that
//! reaches the goal with exactly the requested number of crossings wins.

use std::collections::VecDeque;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::error::{Result, SearchError, Termination};
use crate::path::Path;
use crate::reporter::SearchReporter;
use crate::state::State;

/// Configuration for the solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum passengers per boat trip
    pub boat_capacity: u32,
    /// Exact number of crossings the solution must have
    pub required_crossings: u32,
    /// Iterations before the search gives up
    pub max_iterations: usize,
    /// Seed for the worklist insertion order; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            boat_capacity: 2,
            required_crossings: 11,
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Reject parameters that can never describe a crossing.
    ///
    /// The search itself accepts any values; this is for callers that take
    /// parameters from users.
    pub fn validate(&self) -> Result<()> {
        if self.boat_capacity == 0 {
            return Err(SearchError::InvalidConfiguration(
                "boat capacity must be at least 1".to_string(),
            ));
        }
        if self.required_crossings == 0 {
            return Err(SearchError::InvalidConfiguration(
                "required crossings must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfiguration(
                "iteration cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// A successful search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Route from the initial state to the goal
    pub path: Path,
    /// Iterations used, including the one that popped the solution
    pub iterations: usize,
    /// Goal-reaching paths discarded for having the wrong length
    pub off_length_solutions: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Find a path from `initial` to `goal` with exactly
/// `config.required_crossings` crossings.
///
/// Paths that reach the goal with a different crossing count are dropped and
/// never extended past the goal.
pub fn find_safe_crossing<R>(
    initial: &State,
    goal: &State,
    config: &SolverConfig,
    reporter: &mut R,
) -> Result<SearchOutcome>
where
    R: SearchReporter + ?Sized,
{
    if initial.total_cannibals() != goal.total_cannibals()
        || initial.total_missionaries() != goal.total_missionaries()
    {
        return Err(SearchError::InvalidConfiguration(format!(
            "initial state holds {} cannibals and {} missionaries but goal holds {} and {}",
            initial.total_cannibals(),
            initial.total_missionaries(),
            goal.total_cannibals(),
            goal.total_missionaries()
        )));
    }

    let start_time = Instant::now();
    let target_len = config.required_crossings as usize + 1;

    info!(
        event = "search_start",
        cannibals = initial.total_cannibals(),
        missionaries = initial.total_missionaries(),
        boat_capacity = config.boat_capacity,
        required_crossings = config.required_crossings,
        max_iterations = config.max_iterations,
    );

    if !initial.is_state_safe() {
        return Err(no_solution(0, Termination::UnsafeStart, start_time));
    }

    let mut rng = config.rng();
    let mut worklist: VecDeque<Path> = VecDeque::new();
    worklist.push_back(Path::from_initial(*initial));

    let mut iterations: usize = 0;
    let mut off_length_solutions: usize = 0;

    while let Some(path) = worklist.pop_front() {
        if iterations == config.max_iterations {
            return Err(no_solution(
                iterations,
                Termination::IterationCap,
                start_time,
            ));
        }
        iterations += 1;

        let terminal = *path.terminal_state()?;
        reporter.on_iteration(iterations, &terminal);
        trace!(
            event = "iteration",
            iteration = iterations,
            path_len = path.len(),
            worklist = worklist.len(),
        );

        if terminal == *goal {
            if path.len() == target_len {
                reporter.on_finish(iterations, path.len());
                let time_elapsed_ms = start_time.elapsed().as_millis() as u64;
                info!(
                    event = "search_end",
                    solved = true,
                    iterations = iterations,
                    crossings = path.crossing_count(),
                    off_length_solutions = off_length_solutions,
                    duration_ms = time_elapsed_ms,
                );
                return Ok(SearchOutcome {
                    path,
                    iterations,
                    off_length_solutions,
                    time_elapsed_ms,
                });
            }

            off_length_solutions += 1;
            reporter.on_off_length_goal(path.len());
            debug!(
                event = "off_length_goal",
                iteration = iterations,
                crossings = path.crossing_count(),
            );
            continue;
        }

        let expansions = terminal.generate_expansions(config.boat_capacity);
        reporter.on_expansions(&expansions);

        for next in expansions {
            if let Some(extended) = path.extended_with(next) {
                let index = rng.random_range(0..=worklist.len());
                worklist.insert(index, extended);
            }
        }
    }

    Err(no_solution(
        iterations,
        Termination::FrontierExhausted,
        start_time,
    ))
}

/// Solve the standard puzzle: everyone starts on the West bank with the
/// boat and must end up on the East bank.
pub fn solve<R>(
    cannibals: u32,
    missionaries: u32,
    config: &SolverConfig,
    reporter: &mut R,
) -> Result<SearchOutcome>
where
    R: SearchReporter + ?Sized,
{
    let initial = State::initial(cannibals, missionaries);
    let goal = State::goal(cannibals, missionaries);
    find_safe_crossing(&initial, &goal, config, reporter)
}

fn no_solution(iterations: usize, reason: Termination, start_time: Instant) -> SearchError {
    info!(
        event = "search_end",
        solved = false,
        iterations = iterations,
        reason = %reason,
        duration_ms = start_time.elapsed().as_millis() as u64,
    );
    SearchError::NoSolutionFound { iterations, reason }
}
