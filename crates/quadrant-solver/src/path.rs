//! Turning a parent map back into an operator sequence.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::{PuzzleError, Result};
use crate::grid::{State, Symbol};
use crate::operators::Quadrant;

/// Ordered operators, first to apply first
pub type OperatorSequence = SmallVec<[Quadrant; 16]>;

/// Child state -> (parent state, operator that produced the child)
pub type ParentMap<S> = HashMap<State<S>, (State<S>, Quadrant)>;

/// Walk the parent map from `goal` back to `start`.
///
/// The map must hold a chain from `goal` to `start`; a missing link or a
/// chain longer than the map itself (a cycle) is reported as
/// [`PuzzleError::BrokenParentChain`].
pub fn reconstruct<S: Symbol>(
    parents: &ParentMap<S>,
    start: &State<S>,
    goal: &State<S>,
) -> Result<OperatorSequence> {
    let mut ops = OperatorSequence::new();
    let mut current = *goal;

    while current != *start {
        if ops.len() >= parents.len() {
            return Err(PuzzleError::BrokenParentChain);
        }
        let (parent, op) = parents
            .get(&current)
            .ok_or(PuzzleError::BrokenParentChain)?;
        ops.push(*op);
        current = *parent;
    }

    ops.reverse();
    Ok(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::apply;

    #[test]
    fn test_reconstruct_forward_order() {
        let start = State::solved();
        let mid = apply(Quadrant::TopRight, &start);
        let goal = apply(Quadrant::BottomLeft, &mid);

        let mut parents = ParentMap::new();
        parents.insert(mid, (start, Quadrant::TopRight));
        parents.insert(goal, (mid, Quadrant::BottomLeft));

        let ops = reconstruct(&parents, &start, &goal).unwrap();
        assert_eq!(ops.as_slice(), &[Quadrant::TopRight, Quadrant::BottomLeft]);
    }

    #[test]
    fn test_reconstruct_start_is_goal() {
        let start = State::solved();
        let ops = reconstruct(&ParentMap::new(), &start, &start).unwrap();
        assert!(ops.is_empty());
    }

    #[test]
    fn test_reconstruct_missing_link() {
        let start = State::solved();
        let goal = apply(Quadrant::TopLeft, &start);

        assert!(matches!(
            reconstruct(&ParentMap::new(), &start, &goal),
            Err(PuzzleError::BrokenParentChain)
        ));
    }

    #[test]
    fn test_reconstruct_cycle() {
        let start = State::solved();
        let a = apply(Quadrant::TopLeft, &start);
        let b = apply(Quadrant::TopLeft, &a);

        let mut parents = ParentMap::new();
        parents.insert(a, (b, Quadrant::TopLeft));
        parents.insert(b, (a, Quadrant::TopLeft));

        assert!(matches!(
            reconstruct(&parents, &start, &b),
            Err(PuzzleError::BrokenParentChain)
        ));
    }
}
