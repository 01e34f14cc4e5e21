//! Observers notified by the frontier search.
//!
//! The search calls a [`SearchReporter`] at fixed points of every iteration.
//! [`NoOpReporter`] ignores everything; [`StepReporter`] prints a step by
//! step trace of the search to stdout.

use crate::state::State;

/// Hooks invoked by the search loop.
pub trait SearchReporter {
    /// Called at the start of every iteration with the popped path's terminal state.
    fn on_iteration(&mut self, iteration: usize, state: &State);

    /// Called once when a path of the requested length reaches the goal.
    fn on_finish(&mut self, iterations: usize, path_len: usize);

    /// Called when a path reaches the goal with the wrong number of crossings.
    fn on_off_length_goal(&mut self, path_len: usize);

    /// Called with the neighbors generated from a terminal state, possibly none.
    fn on_expansions(&mut self, expansions: &[State]);

    /// Returns the name of the reporter.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn SearchReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchReporter({})", self.name())
    }
}

/// Reporter used when step tracing is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl SearchReporter for NoOpReporter {
    #[inline(always)]
    fn on_iteration(&mut self, _iteration: usize, _state: &State) {}

    #[inline(always)]
    fn on_finish(&mut self, _iterations: usize, _path_len: usize) {}

    #[inline(always)]
    fn on_off_length_goal(&mut self, _path_len: usize) {}

    #[inline(always)]
    fn on_expansions(&mut self, _expansions: &[State]) {}

    fn name(&self) -> &str {
        "NoOpReporter"
    }
}

/// Prints every iteration, the generated neighbors and the outcome.
#[derive(Debug, Clone, Default)]
pub struct StepReporter {
    banner_printed: bool,
}

impl StepReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_banner_once(&mut self) {
        if !self.banner_printed {
            println!("Step tracing enabled...");
            self.banner_printed = true;
        }
    }
}

impl SearchReporter for StepReporter {
    fn on_iteration(&mut self, iteration: usize, state: &State) {
        self.print_banner_once();
        println!("{}", "*".repeat(27));
        println!("ITERATION #{}", iteration);
        println!("---CURRENT STATE---");
        println!("{}\n", state);
    }

    fn on_finish(&mut self, iterations: usize, path_len: usize) {
        println!("---FINISHED EXECUTION---");
        println!("SOLUTION FOUND IN: {} ITERATIONS", iterations);
        println!("SOLUTION STEP COUNT: {} STEPS", path_len.saturating_sub(1));
        println!("{}\n", "*".repeat(27));
    }

    fn on_off_length_goal(&mut self, path_len: usize) {
        println!("\n!!!FOUND SOLUTION OF THE WRONG LENGTH, CONTINUE SEARCHING!!!");
        println!("REASON: PATH LENGTH IS {}\n", path_len.saturating_sub(1));
    }

    fn on_expansions(&mut self, expansions: &[State]) {
        println!("\n---GENERATED NEIGHBORS---");
        if expansions.is_empty() {
            println!("No neighbors generated for this state...");
            return;
        }
        for (index, neighbor) in expansions.iter().enumerate() {
            println!("***NEIGHBOR #{}***", index);
            println!("{}\n", neighbor);
        }
    }

    fn name(&self) -> &str {
        "StepReporter"
    }
}
