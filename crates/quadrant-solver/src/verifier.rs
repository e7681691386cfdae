//! Replaying operator sequences to check solver output.

use crate::grid::{State, Symbol};
use crate::operators::{apply, Quadrant};

/// Apply `ops` left to right starting from `state`
pub fn apply_sequence<S: Symbol>(state: &State<S>, ops: &[Quadrant]) -> State<S> {
    ops.iter().fold(*state, |current, &op| apply(op, &current))
}

/// Does `ops` turn `state` into `goal`?
pub fn verify<S: Symbol>(state: &State<S>, ops: &[Quadrant], goal: &State<S>) -> bool {
    apply_sequence(state, ops) == *goal
}

/// Every state visited while replaying `ops`, starting state first
pub fn trace<S: Symbol>(state: &State<S>, ops: &[Quadrant]) -> Vec<State<S>> {
    let mut current = *state;
    let mut states = Vec::with_capacity(ops.len() + 1);
    states.push(current);
    for &op in ops {
        current = apply(op, &current);
        states.push(current);
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_identity() {
        let start = State::solved();
        assert_eq!(apply_sequence(&start, &[]), start);
        assert!(verify(&start, &[], &start));
    }

    #[test]
    fn test_sequence_applies_in_order() {
        let start = State::solved();
        let ops = [Quadrant::TopLeft, Quadrant::BottomRight];
        let expected = apply(Quadrant::BottomRight, &apply(Quadrant::TopLeft, &start));

        assert_eq!(apply_sequence(&start, &ops), expected);
        assert!(verify(&start, &ops, &expected));

        // Reversed order lands elsewhere
        let reversed = [Quadrant::BottomRight, Quadrant::TopLeft];
        assert!(!verify(&start, &reversed, &expected));
    }

    #[test]
    fn test_trace_records_each_step() {
        let start = State::solved();
        let ops = [Quadrant::TopRight, Quadrant::TopRight];
        let states = trace(&start, &ops);

        assert_eq!(states.len(), 3);
        assert_eq!(states[0], start);
        assert_eq!(states[1], apply(Quadrant::TopRight, &start));
        assert_eq!(states[2], apply_sequence(&start, &ops));
    }
}
