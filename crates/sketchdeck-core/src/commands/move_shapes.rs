//! Move: translate the selected top-level shapes.

use super::{Command, Snapshot};
use crate::state::ApplicationState;
use kurbo::{Affine, Vec2};
use std::sync::Arc;

/// Translates every selected top-level shape by a fixed offset.
#[derive(Debug)]
pub struct MoveCommand {
    before: Snapshot,
    after: Snapshot,
}

impl MoveCommand {
    /// Build the command, or `None` when nothing is selected or the offset is zero.
    pub fn new(state: &ApplicationState, delta: Vec2) -> Option<Self> {
        if state.selected().is_empty() || delta == Vec2::ZERO {
            return None;
        }
        let translate = Affine::translate(delta);
        let shapes: Vec<_> = state
            .shapes()
            .iter()
            .map(|shape| {
                if state.is_selected(shape.id()) {
                    let mut moved = Arc::clone(shape);
                    Arc::make_mut(&mut moved).transform(translate);
                    moved
                } else {
                    Arc::clone(shape)
                }
            })
            .collect();

        let before = Snapshot::capture(state);
        let after = Snapshot {
            shapes: shapes.into(),
            selected: before.selected.clone(),
        };
        Some(Self { before, after })
    }
}

impl Command for MoveCommand {
    fn run(&self, state: &mut ApplicationState) {
        state.set_shapes(self.after.shapes.clone());
    }

    fn undo(&self, state: &mut ApplicationState) {
        self.before.restore(state);
    }

    fn description(&self) -> &str {
        "Move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{group, rect, state_with};

    #[test]
    fn test_move_translates_selection_only() {
        let (a, b) = (rect(0.0), rect(100.0));
        let mut state = state_with(&[&a, &b]);
        state.set_selected(vec![a.id()]);

        let cmd = MoveCommand::new(&state, Vec2::new(5.0, 7.0)).unwrap();
        cmd.run(&mut state);

        let moved = state.shapes()[0].bounds();
        assert!((moved.x0 - 5.0).abs() < f64::EPSILON);
        assert!((moved.y0 - 7.0).abs() < f64::EPSILON);
        assert!((state.shapes()[1].bounds().x0 - 100.0).abs() < f64::EPSILON);
        // The captured shape is untouched
        assert!((a.bounds().x0 - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_group_moves_descendants() {
        let (a, b) = (rect(0.0), rect(20.0));
        let g = group(&[&a, &b]);
        let mut state = state_with(&[&g]);
        state.set_selected(vec![g.id()]);

        MoveCommand::new(&state, Vec2::new(10.0, 0.0))
            .unwrap()
            .run(&mut state);

        let inner = state.find_shape(b.id()).unwrap();
        assert!((inner.bounds().x0 - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_without_selection_or_offset() {
        let a = rect(0.0);
        let mut state = state_with(&[&a]);
        assert!(MoveCommand::new(&state, Vec2::new(1.0, 0.0)).is_none());

        state.set_selected(vec![a.id()]);
        assert!(MoveCommand::new(&state, Vec2::ZERO).is_none());
    }

    #[test]
    fn test_undo_move() {
        let a = rect(0.0);
        let mut state = state_with(&[&a]);
        state.set_selected(vec![a.id()]);

        let cmd = MoveCommand::new(&state, Vec2::new(3.0, 3.0)).unwrap();
        cmd.run(&mut state);
        cmd.undo(&mut state);

        assert_eq!(state.shapes()[0], a);
        assert_eq!(state.selected().as_ref(), &[a.id()]);
    }
}
