//! Group: gather the selected top-level shapes into one composite.

use super::{Command, Snapshot};
use crate::shapes::{Group, ShapeRef};
use crate::state::ApplicationState;
use std::sync::Arc;

/// Groups the selected top-level shapes.
///
/// The new group takes the slot of the topmost selected shape; the other
/// selected shapes leave their slots. Children keep their relative z-order and
/// only the new group is selected afterwards.
#[derive(Debug)]
pub struct GroupCommand {
    before: Snapshot,
    after: Snapshot,
}

impl GroupCommand {
    /// Build the command, or `None` when fewer than two top-level shapes are
    /// selected.
    pub fn new(state: &ApplicationState) -> Option<Self> {
        let children = state.selected_shapes();
        if children.len() < 2 {
            return None;
        }
        let topmost = children.last()?.id();
        let group: ShapeRef = Arc::new(Group::new(children).into());
        let group_id = group.id();

        let mut shapes = Vec::with_capacity(state.len());
        for shape in state.shapes().iter() {
            if shape.id() == topmost {
                shapes.push(Arc::clone(&group));
            } else if !state.is_selected(shape.id()) {
                shapes.push(Arc::clone(shape));
            }
        }

        Some(Self {
            before: Snapshot::capture(state),
            after: Snapshot {
                shapes: shapes.into(),
                selected: vec![group_id].into(),
            },
        })
    }
}

impl Command for GroupCommand {
    fn run(&self, state: &mut ApplicationState) {
        self.after.restore(state);
    }

    fn undo(&self, state: &mut ApplicationState) {
        self.before.restore(state);
    }

    fn description(&self) -> &str {
        "Group"
    }
}
