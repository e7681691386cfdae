//! Random operator walks for generating solvable instances.

use rand::Rng;

use crate::grid::{State, Symbol};
use crate::operators::{apply, Quadrant};

/// A goal produced by a random walk, along with the walk itself
#[derive(Debug, Clone)]
pub struct Scramble<S> {
    pub goal: State<S>,
    pub operators: Vec<Quadrant>,
}

/// Apply `moves` uniformly chosen operators to `start`.
///
/// The walk may undo itself, so the shortest solution is at most `moves`
/// long and often shorter.
pub fn scramble<S: Symbol, R: Rng + ?Sized>(
    start: &State<S>,
    moves: usize,
    rng: &mut R,
) -> Scramble<S> {
    let mut goal = *start;
    let mut operators = Vec::with_capacity(moves);

    for _ in 0..moves {
        let op = Quadrant::ALL[rng.gen_range(0..Quadrant::ALL.len())];
        goal = apply(op, &goal);
        operators.push(op);
    }

    Scramble { goal, operators }
}
