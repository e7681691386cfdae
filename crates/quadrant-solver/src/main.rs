//! CLI entry point for the quadrant solver.
//!
//! Usage:
//!   quadrant-solver solve <request.json> [options]
//!   quadrant-solver solve --stdin [options]
//!   quadrant-solver solve --start 123456789 --goal 413526789 [options]
//!   quadrant-solver verify --start <S> --goal <S> --ops 0,3,1
//!   quadrant-solver bench [--seed <n>] [--json]
//!
//! Options:
//!   --distinct      Reject grids that repeat a symbol
//!   --show-steps    Include every intermediate grid in the report
//!   -v, --verbose   Enable debug logging (RUST_LOG overrides)

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use quadrant_solver::{
    apply_sequence, bench, decode, encode, search, trace, verify, BenchConfig, Grid, PuzzleError,
    Quadrant, Result, SearchReport, State,
};

#[derive(Parser)]
#[command(name = "quadrant-solver")]
#[command(about = "Shortest-sequence solver for the 3x3 quadrant rotation puzzle")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest rotation sequence from start to goal
    Solve {
        /// Path to request JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE", conflicts_with_all = ["start", "goal"])]
        file: Option<PathBuf>,

        /// Read request from stdin instead of file
        #[arg(long, conflicts_with_all = ["file", "start", "goal"])]
        stdin: bool,

        /// Start configuration as 9 symbols in reading order
        #[arg(long, requires = "goal")]
        start: Option<String>,

        /// Goal configuration as 9 symbols in reading order
        #[arg(long, requires = "start")]
        goal: Option<String>,

        /// Reject grids that repeat a symbol
        #[arg(long)]
        distinct: bool,

        /// Include every intermediate grid in the report
        #[arg(long)]
        show_steps: bool,
    },

    /// Check that an operator sequence turns start into goal
    Verify {
        /// Start configuration as 9 symbols in reading order
        #[arg(long)]
        start: String,

        /// Goal configuration as 9 symbols in reading order
        #[arg(long)]
        goal: String,

        /// Comma-separated operator indices (0-3)
        #[arg(long, default_value = "")]
        ops: String,
    },

    /// Time the solver on random scrambles of the solved grid
    Bench {
        /// Seed for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,

        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Solve request read from a file or stdin
#[derive(Debug, Deserialize)]
struct SolveRequest {
    start: Vec<Vec<u8>>,
    goal: Vec<Vec<u8>>,
}

/// Output format for a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    operators: Option<Vec<Quadrant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<usize>,
    states_expanded: usize,
    states_discovered: usize,
    time_elapsed_ms: u64,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Grid>>,
}

/// Output format for a verification
#[derive(Debug, Serialize)]
struct VerifyOutput {
    valid: bool,
    result: Grid,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .try_init();

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Execute a command; `Ok(false)` means no solution or an invalid sequence
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Solve {
            file,
            stdin,
            start,
            goal,
            distinct,
            show_steps,
        } => {
            let (start, goal) = match (start, goal) {
                (Some(start), Some(goal)) => (start.parse::<State>()?, goal.parse::<State>()?),
                _ => read_request(file, stdin)?,
            };

            if distinct {
                start.ensure_distinct()?;
                goal.ensure_distinct()?;
            }

            debug!(start = ?start.cells(), goal = ?goal.cells(), "solving");
            let report = search(&start, &goal);
            let output = format_result(&report, &start, &goal, show_steps);
            println!("{}", serde_json::to_string_pretty(&output)?);

            Ok(report.found())
        }

        Commands::Verify { start, goal, ops } => {
            let start: State = start.parse()?;
            let goal: State = goal.parse()?;
            let ops = parse_operators(&ops)?;

            let output = VerifyOutput {
                valid: verify(&start, &ops, &goal),
                result: decode(&apply_sequence(&start, &ops)),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);

            Ok(output.valid)
        }

        Commands::Bench { seed, json } => {
            let config = BenchConfig {
                seed,
                ..BenchConfig::default()
            };
            info!(scenarios = config.scenarios.len(), ?seed, "running benchmark");

            let records = bench::run(&State::solved(), &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", bench::render_table(&records));
            }

            Ok(records.iter().all(|r| r.verified))
        }
    }
}

fn read_request(file: Option<PathBuf>, stdin: bool) -> Result<(State, State)> {
    let json_content = if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(path) = file {
        fs::read_to_string(&path)?
    } else {
        return Err(PuzzleError::MissingInput(
            "provide a request file, --stdin, or --start and --goal".to_string(),
        ));
    };

    parse_request(&json_content)
}

/// Decode a `{"start": [[..]], "goal": [[..]]}` request into states
fn parse_request(json: &str) -> Result<(State, State)> {
    let request: SolveRequest = serde_json::from_str(json)?;
    let start = encode(&Grid::from_rows(request.start)?);
    let goal = encode(&Grid::from_rows(request.goal)?);
    Ok((start, goal))
}

fn parse_operators(list: &str) -> Result<Vec<Quadrant>> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            let index: u8 = t
                .parse()
                .map_err(|_| PuzzleError::InvalidSymbol(t.to_string()))?;
            Quadrant::from_index(index)
        })
        .collect()
}

fn format_result(
    report: &SearchReport,
    start: &State,
    goal: &State,
    show_steps: bool,
) -> SolveOutput {
    SolveOutput {
        found: report.found(),
        operators: report.path.as_ref().map(|p| p.to_vec()),
        length: report.path.as_ref().map(|p| p.len()),
        states_expanded: report.states_expanded,
        states_discovered: report.states_discovered,
        time_elapsed_ms: report.time_elapsed_ms,
        verified: report
            .path
            .as_ref()
            .map_or(false, |p| verify(start, p, goal)),
        steps: match (&report.path, show_steps) {
            (Some(path), true) => Some(trace(start, path).iter().map(decode).collect()),
            _ => None,
        },
    }
}
