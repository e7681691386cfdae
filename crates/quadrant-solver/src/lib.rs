//! Shortest-sequence solver for the 3x3 quadrant rotation puzzle.
//!
//! A configuration is a 3x3 grid of symbols. Four operators each rotate one
//! 2x2 quadrant clockwise by a quarter turn. Given a start and a goal, the
//! solver finds a minimal operator sequence by breadth-first search, or
//! reports that the goal is unreachable.

pub mod bench;
pub mod error;
pub mod grid;
pub mod operators;
pub mod path;
pub mod scramble;
pub mod solver;
pub mod verifier;

// Re-export main types
pub use bench::{render_table, BenchConfig, BenchRecord, Scenario};
pub use error::{PuzzleError, Result};
pub use grid::{decode, encode, Grid, State, Symbol};
pub use operators::{apply, successors, Quadrant};
pub use path::{reconstruct, OperatorSequence, ParentMap};
pub use scramble::{scramble, Scramble};
pub use solver::{search, solve, SearchReport};
pub use verifier::{apply_sequence, trace, verify};
