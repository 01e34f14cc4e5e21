//! CLI entry point for the river crossing solver.
//!
//! Usage:
//!   river-crossing solve [options]
//!
//! Options:
//!   --cannibals <n>         Number of cannibals (prompted if omitted)
//!   --missionaries <n>      Number of missionaries (prompted if omitted)
//!   --capacity <n>          Boat capacity (prompted if omitted)
//!   --crossings <n>         Exact number of crossings (prompted if omitted)
//!   --step                  Print every search iteration
//!   --max-iterations <n>    Iteration cap (default: 10000)
//!   --seed <n>              Seed for a reproducible search
//!   --json                  Print the result as JSON
//!   --verbose               Log search lifecycle events to stderr

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use river_crossing::{
    solve, NoOpReporter, SearchError, SearchOutcome, SolverConfig, State, StepReporter,
};

#[derive(Parser)]
#[command(name = "river-crossing")]
#[command(about = "Exact-length solver for the missionaries and cannibals puzzle")]
#[command(version)]
struct Cli {
    /// Log search lifecycle events to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a crossing with an exact number of boat trips
    Solve {
        /// Number of cannibals
        #[arg(long)]
        cannibals: Option<u32>,

        /// Number of missionaries
        #[arg(long)]
        missionaries: Option<u32>,

        /// Maximum passengers per boat trip
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        capacity: Option<u32>,

        /// Exact number of crossings the solution must take
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        crossings: Option<u32>,

        /// Print every search iteration
        #[arg(long)]
        step: bool,

        /// Iterations before the search gives up
        #[arg(long, default_value = "10000")]
        max_iterations: usize,

        /// Seed for a reproducible search
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output format for a search result
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    crossings: usize,
    iterations: usize,
    off_length_solutions: usize,
    time_elapsed_ms: u64,
    states: Vec<State>,
    actions: Vec<String>,
}

struct Parameters {
    cannibals: u32,
    missionaries: u32,
    step: bool,
    config: SolverConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve {
            cannibals,
            missionaries,
            capacity,
            crossings,
            step,
            max_iterations,
            seed,
            json,
        } => {
            let prompted = cannibals.is_none()
                || missionaries.is_none()
                || capacity.is_none()
                || crossings.is_none();

            let params = match collect_parameters(
                cannibals,
                missionaries,
                capacity,
                crossings,
                step,
                prompted,
                max_iterations,
                seed,
            ) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            if let Err(e) = params.config.validate() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }

            // Run solver
            let result = if params.step {
                solve(
                    params.cannibals,
                    params.missionaries,
                    &params.config,
                    &mut StepReporter::new(),
                )
            } else {
                solve(
                    params.cannibals,
                    params.missionaries,
                    &params.config,
                    &mut NoOpReporter,
                )
            };

            if json {
                let output = format_result(&result);
                match serde_json::to_string_pretty(&output) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Error serializing result: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_solution_map(&result);
            }

            // Exit with appropriate code
            if result.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "river_crossing=info"
    } else {
        "river_crossing=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[allow(clippy::too_many_arguments)]
fn collect_parameters(
    cannibals: Option<u32>,
    missionaries: Option<u32>,
    capacity: Option<u32>,
    crossings: Option<u32>,
    step: bool,
    prompted: bool,
    max_iterations: usize,
    seed: Option<u64>,
) -> io::Result<Parameters> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let cannibals = value_or_prompt(cannibals, "Please enter number of cannibals: ", &mut input)?;
    let missionaries =
        value_or_prompt(missionaries, "Please enter number of missionaries: ", &mut input)?;
    let boat_capacity =
        value_or_prompt(capacity, "Please enter the capacity of the boat: ", &mut input)?;
    let required_crossings = value_or_prompt(
        crossings,
        "Please enter the desired number of crossings to find a solution: ",
        &mut input,
    )?;

    let step = if step || !prompted {
        step
    } else {
        let answer = prompt_line(
            "Please press key 'S' for executing the program in single-stepping mode: ",
            &mut input,
        )?;
        answer == "S" || answer == "s"
    };

    Ok(Parameters {
        cannibals,
        missionaries,
        step,
        config: SolverConfig {
            boat_capacity,
            required_crossings,
            max_iterations,
            seed,
        },
    })
}

fn value_or_prompt<T, R>(value: Option<T>, message: &str, input: &mut R) -> io::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    R: BufRead,
{
    if let Some(v) = value {
        return Ok(v);
    }

    let line = prompt_line(message, input)?;
    line.parse::<T>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a valid number: {}", line, e),
        )
    })
}

fn prompt_line<R: BufRead>(message: &str, input: &mut R) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before all parameters were read",
        ));
    }
    Ok(line.trim().to_string())
}

fn print_solution_map(result: &Result<SearchOutcome, SearchError>) {
    println!("\n---SOLUTION MAP---");
    match result {
        Ok(outcome) => print!("{}", outcome.path),
        Err(e) => {
            eprintln!("{}", e);
            println!("The path is empty");
        }
    }
}

fn format_result(result: &Result<SearchOutcome, SearchError>) -> SolveOutput {
    match result {
        Ok(outcome) => SolveOutput {
            solved: true,
            reason: None,
            crossings: outcome.path.crossing_count(),
            iterations: outcome.iterations,
            off_length_solutions: outcome.off_length_solutions,
            time_elapsed_ms: outcome.time_elapsed_ms,
            states: outcome.path.states().to_vec(),
            actions: outcome.path.crossings().map(|c| c.to_string()).collect(),
        },
        Err(e) => SolveOutput {
            solved: false,
            reason: Some(e.to_string()),
            crossings: 0,
            iterations: match e {
                SearchError::NoSolutionFound { iterations, .. } => *iterations,
                _ => 0,
            },
            off_length_solutions: 0,
            time_elapsed_ms: 0,
            states: Vec::new(),
            actions: Vec::new(),
        },
    }
}
