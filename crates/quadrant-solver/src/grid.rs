//! Grid and state representation, plus the codec between them.
//!
//! A `Grid` is the 3x3 view callers think in; a `State` is the row-major
//! flattening the search hashes and compares. Both are plain `Copy` values.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

/// Grid side length
pub const SIDE: usize = 3;

/// Number of cells in a grid
pub const CELLS: usize = SIDE * SIDE;

/// Row and column indices, for building fixed-size arrays with `map`
const AXIS: [usize; SIDE] = [0, 1, 2];

/// Anything that can sit in a cell: cheap to copy, comparable, hashable
pub trait Symbol: Copy + Eq + Hash + fmt::Debug {}

impl<T: Copy + Eq + Hash + fmt::Debug> Symbol for T {}

/// A 3x3 arrangement of symbols, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid<S = u8> {
    pub rows: [[S; SIDE]; SIDE],
}

impl<S: Symbol> Grid<S> {
    pub fn new(rows: [[S; SIDE]; SIDE]) -> Self {
        Self { rows }
    }

    /// Build a grid from loosely shaped input, rejecting anything but 3x3
    pub fn from_rows(rows: Vec<Vec<S>>) -> Result<Self> {
        if rows.len() != SIDE {
            return Err(PuzzleError::InvalidShape(format!("{} rows", rows.len())));
        }

        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIDE {
                return Err(PuzzleError::InvalidShape(format!(
                    "row {} with {} symbols",
                    r,
                    row.len()
                )));
            }
        }

        Ok(Self::new(AXIS.map(|r| AXIS.map(|c| rows[r][c]))))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<S> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

impl<S: fmt::Display> fmt::Display for Grid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Row-major encoding of a grid: position (r, c) lives at `r * 3 + c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State<S = u8> {
    cells: [S; CELLS],
}

impl<S: Symbol> State<S> {
    pub fn new(cells: [S; CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[S; CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<S> {
        self.cells.get(index).copied()
    }

    /// Reject states that repeat a symbol.
    ///
    /// The search does not need this; it is a precondition callers can opt
    /// into when their puzzle uses a fixed set of distinct symbols.
    pub fn ensure_distinct(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(CELLS);
        for symbol in &self.cells {
            if !seen.insert(symbol) {
                return Err(PuzzleError::DuplicateSymbol(format!("{:?}", symbol)));
            }
        }
        Ok(())
    }
}

impl State<u8> {
    /// The solved configuration 1..=9 in reading order
    pub fn solved() -> Self {
        Self::new([1, 2, 3, 4, 5, 6, 7, 8, 9])
    }
}

impl<S: Symbol> From<Grid<S>> for State<S> {
    fn from(grid: Grid<S>) -> Self {
        encode(&grid)
    }
}

impl<S: Symbol> From<State<S>> for Grid<S> {
    fn from(state: State<S>) -> Self {
        decode(&state)
    }
}

impl FromStr for State<u8> {
    type Err = PuzzleError;

    /// Accepts `"1,2,3,4,5,6,7,8,9"`, whitespace separated symbols, or a
    /// bare digit string such as `"123456789"`.
    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let symbols: Vec<u8> = match tokens.as_slice() {
            [digits] if digits.len() == CELLS && digits.chars().all(|c| c.is_ascii_digit()) => {
                digits.bytes().map(|b| b - b'0').collect()
            }
            _ => tokens
                .iter()
                .map(|t| {
                    t.parse::<u8>()
                        .map_err(|_| PuzzleError::InvalidSymbol(t.to_string()))
                })
                .collect::<Result<_>>()?,
        };

        let cells: [u8; CELLS] = symbols
            .as_slice()
            .try_into()
            .map_err(|_| PuzzleError::SymbolCount(symbols.len()))?;
        Ok(Self::new(cells))
    }
}

/// Flatten a grid in row-major order
pub fn encode<S: Symbol>(grid: &Grid<S>) -> State<S> {
    let mut cells = [grid.rows[0][0]; CELLS];
    for (r, row) in grid.rows.iter().enumerate() {
        for (c, &symbol) in row.iter().enumerate() {
            cells[r * SIDE + c] = symbol;
        }
    }
    State::new(cells)
}

/// Inverse of [`encode`]
pub fn decode<S: Symbol>(state: &State<S>) -> Grid<S> {
    let cells = state.cells();
    Grid::new(AXIS.map(|r| AXIS.map(|c| cells[r * SIDE + c])))
}
