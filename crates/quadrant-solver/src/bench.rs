//! Difficulty scenarios, timing and a plain-text results table.
//!
//! Each scenario scrambles the start state with a fixed number of random
//! rotations and times how long the solver takes to undo it.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::grid::{State, Symbol};
use crate::scramble::scramble;
use crate::solver::solve;
use crate::verifier::verify;

const RULE_WIDTH: usize = 73;

/// A named difficulty level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub rotations: usize,
}

impl Scenario {
    pub fn new(name: &str, rotations: usize) -> Self {
        Self {
            name: name.to_string(),
            rotations,
        }
    }
}

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub scenarios: Vec<Scenario>,
    /// Fixed seed for reproducible scrambles; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            scenarios: vec![
                Scenario::new("Easy", 3),
                Scenario::new("Medium", 8),
                Scenario::new("Hard", 15),
            ],
            seed: None,
        }
    }
}

/// One row of the results table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchRecord {
    pub scenario: String,
    pub rotations_generated: usize,
    /// `None` when the solver reported no solution
    pub sequence_length: Option<usize>,
    pub verified: bool,
    pub time_seconds: f64,
}

/// Run every scenario from `start` and collect the timings
pub fn run<S: Symbol>(start: &State<S>, config: &BenchConfig) -> Vec<BenchRecord> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut records = Vec::with_capacity(config.scenarios.len());
    for scenario in &config.scenarios {
        let scrambled = scramble(start, scenario.rotations, &mut rng);

        let started = Instant::now();
        let path = solve(start, &scrambled.goal);
        let time_seconds = started.elapsed().as_secs_f64();

        let verified = path
            .as_ref()
            .map_or(false, |ops| verify(start, ops, &scrambled.goal));

        trace!(
            scenario = %scenario.name,
            rotations = scenario.rotations,
            length = ?path.as_ref().map(|p| p.len()),
            time_seconds,
            "scenario finished"
        );

        records.push(BenchRecord {
            scenario: scenario.name.clone(),
            rotations_generated: scenario.rotations,
            sequence_length: path.map(|p| p.len()),
            verified,
            time_seconds,
        });
    }

    records
}

/// Render records as a fixed-width table
pub fn render_table(records: &[BenchRecord]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!(
            "| {:<9} | {:<19} | {:<22} | {:<10} |",
            "Scenario", "Rotations Generated", "BFS Sequence Length", "Time (s)"
        ),
        format!(
            "|{}|{}|{}|{}|",
            "-".repeat(11),
            "-".repeat(21),
            "-".repeat(24),
            "-".repeat(12)
        ),
    ];

    for record in records {
        let length = record
            .sequence_length
            .map_or_else(|| "N/A".to_string(), |len| len.to_string());
        lines.push(format!(
            "| {:<9} | {:<19} | {:<22} | {:<10.4} |",
            record.scenario, record.rotations_generated, length, record.time_seconds
        ));
    }

    lines.push(rule);
    lines.join("\n")
}
