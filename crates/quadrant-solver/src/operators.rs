//! The four quadrant rotations and successor generation.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::PuzzleError;
use crate::grid::{State, Symbol};

/// One clockwise quarter turn of a 2x2 quadrant.
///
/// Serializes as its operator index (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// All operators in expansion order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn from_index(index: u8) -> Result<Self, PuzzleError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(PuzzleError::InvalidOperator(index))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Row-major cell indices of the quadrant, listed clockwise from its
    /// top-left corner
    pub fn cycle(self) -> [usize; 4] {
        match self {
            Quadrant::TopLeft => [0, 1, 4, 3],
            Quadrant::TopRight => [1, 2, 5, 4],
            Quadrant::BottomLeft => [3, 4, 7, 6],
            Quadrant::BottomRight => [4, 5, 8, 7],
        }
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = PuzzleError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Quadrant> for u8 {
    fn from(op: Quadrant) -> u8 {
        op.index()
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Successor list: always exactly one entry per operator
pub type Successors<S> = SmallVec<[(State<S>, Quadrant); 4]>;

/// Rotate one quadrant clockwise, returning a new state.
///
/// Every symbol advances one step along the quadrant's cycle and the last
/// one wraps around to the first position.
pub fn apply<S: Symbol>(op: Quadrant, state: &State<S>) -> State<S> {
    let [a, b, c, d] = op.cycle();
    let mut cells = *state.cells();

    let tmp = cells[d];
    cells[d] = cells[c];
    cells[c] = cells[b];
    cells[b] = cells[a];
    cells[a] = tmp;

    State::new(cells)
}

/// Neighbours of `state`, in operator order 0, 1, 2, 3
pub fn successors<S: Symbol>(state: &State<S>) -> Successors<S> {
    Quadrant::ALL
        .iter()
        .map(|&op| (apply(op, state), op))
        .collect()
}
