//! Delete: remove the selected top-level shapes.

use super::{Command, Snapshot};
use crate::shapes::ShapeId;
use crate::state::ApplicationState;

/// Removes every selected top-level shape and clears the selection.
#[derive(Debug)]
pub struct DeleteCommand {
    before: Snapshot,
    targets: Vec<ShapeId>,
}

impl DeleteCommand {
    /// Build the command, or `None` when no top-level shape is selected.
    pub fn new(state: &ApplicationState) -> Option<Self> {
        let targets: Vec<ShapeId> = state.selected_shapes().iter().map(|s| s.id()).collect();
        if targets.is_empty() {
            return None;
        }
        Some(Self {
            before: Snapshot::capture(state),
            targets,
        })
    }

    pub fn targets(&self) -> &[ShapeId] {
        &self.targets
    }
}

impl Command for DeleteCommand {
    fn run(&self, state: &mut ApplicationState) {
        for &id in &self.targets {
            state.remove_shape(id);
        }
        state.set_selected(Vec::new());
    }

    fn undo(&self, state: &mut ApplicationState) {
        self.before.restore(state);
    }

    fn description(&self) -> &str {
        "Delete"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{ids, rect, state_with};

    #[test]
    fn test_delete_selected() {
        let (a, b, c) = (rect(0.0), rect(10.0), rect(20.0));
        let mut state = state_with(&[&a, &b, &c]);
        state.set_selected(vec![c.id(), a.id()]);

        let cmd = DeleteCommand::new(&state).unwrap();
        assert_eq!(cmd.targets(), &[a.id(), c.id()]);
        cmd.run(&mut state);

        assert_eq!(ids(&state), vec![b.id()]);
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_delete_nothing_selected() {
        let a = rect(0.0);
        let state = state_with(&[&a]);
        assert!(DeleteCommand::new(&state).is_none());
    }

    #[test]
    fn test_undo_delete() {
        let (a, b) = (rect(0.0), rect(10.0));
        let mut state = state_with(&[&a, &b]);
        state.set_selected(vec![a.id()]);

        let cmd = DeleteCommand::new(&state).unwrap();
        cmd.run(&mut state);
        cmd.undo(&mut state);

        assert_eq!(ids(&state), vec![a.id(), b.id()]);
        assert_eq!(state.selected().as_ref(), &[a.id()]);
    }
}
