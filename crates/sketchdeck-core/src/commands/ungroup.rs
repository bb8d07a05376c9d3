//! Ungroup: splice the children of processed groups into the z-order.

use super::{Command, Snapshot};
use crate::shapes::{Shape, ShapeRef};
use crate::state::ApplicationState;
use std::sync::Arc;

/// Removes one level of grouping.
///
/// The processed set is the selection, or every top-level shape when nothing
/// is selected. Each processed group is replaced by its direct children, in
/// order, at the group's slot; processed leaves pass through. Everything
/// processed ends up selected. Nested groups are left intact.
#[derive(Debug)]
pub struct UngroupCommand {
    before: Snapshot,
    after: Snapshot,
    ungrouped: usize,
}

impl UngroupCommand {
    pub fn new(state: &ApplicationState) -> Self {
        let before = Snapshot::capture(state);
        let process_all = before.selected.is_empty();

        let mut shapes: Vec<ShapeRef> = Vec::with_capacity(before.shapes.len());
        let mut selected = Vec::new();
        let mut ungrouped = 0;

        for shape in before.shapes.iter() {
            if !process_all && !state.is_selected(shape.id()) {
                shapes.push(Arc::clone(shape));
                continue;
            }
            match shape.as_ref() {
                Shape::Group(group) => {
                    for child in group.children() {
                        shapes.push(Arc::clone(child));
                        selected.push(child.id());
                    }
                    log::debug!("{} elements ungrouped", group.len());
                    ungrouped += 1;
                }
                Shape::Rectangle(_) | Shape::Ellipse(_) | Shape::Triangle(_) => {
                    shapes.push(Arc::clone(shape));
                    selected.push(shape.id());
                }
            }
        }

        Self {
            before,
            after: Snapshot {
                shapes: shapes.into(),
                selected: selected.into(),
            },
            ungrouped,
        }
    }

    /// Number of groups this command dissolves.
    pub fn ungrouped(&self) -> usize {
        self.ungrouped
    }
}

impl Command for UngroupCommand {
    fn run(&self, state: &mut ApplicationState) {
        self.after.restore(state);
    }

    fn undo(&self, state: &mut ApplicationState) {
        self.before.restore(state);
    }

    fn description(&self) -> &str {
        "Ungroup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{group, ids, rect, state_with};

    #[test]
    fn test_ungroup_splices_children_in_place() {
        let (a, b, c, d) = (rect(0.0), rect(10.0), rect(20.0), rect(30.0));
        let g = group(&[&b, &c]);
        let mut state = state_with(&[&a, &g, &d]);
        state.set_selected(vec![g.id()]);

        let cmd = UngroupCommand::new(&state);
        cmd.run(&mut state);

        assert_eq!(ids(&state), vec![a.id(), b.id(), c.id(), d.id()]);
        assert_eq!(state.selected().as_ref(), &[b.id(), c.id()]);
        assert!(!state.is_selected(a.id()));
        assert!(!state.is_selected(d.id()));
        assert_eq!(cmd.ungrouped(), 1);
    }

    #[test]
    fn test_ungroup_without_groups_is_identity() {
        let (a, b) = (rect(0.0), rect(10.0));
        let mut state = state_with(&[&a, &b]);

        let cmd = UngroupCommand::new(&state);
        cmd.run(&mut state);

        assert_eq!(ids(&state), vec![a.id(), b.id()]);
        assert_eq!(state.selected().len(), state.shapes().len());
        assert_eq!(cmd.ungrouped(), 0);
    }

    #[test]
    fn test_ungroup_removes_one_level_only() {
        let (a, b) = (rect(0.0), rect(10.0));
        let inner = group(&[&a]);
        let outer = group(&[&inner, &b]);
        let mut state = state_with(&[&outer]);

        UngroupCommand::new(&state).run(&mut state);

        assert_eq!(ids(&state), vec![inner.id(), b.id()]);
        assert!(state.shapes()[0].is_group());
    }

    #[test]
    fn test_empty_group_disappears() {
        let a = rect(0.0);
        let empty = group(&[]);
        let mut state = state_with(&[&empty, &a]);

        UngroupCommand::new(&state).run(&mut state);

        assert_eq!(ids(&state), vec![a.id()]);
    }

    #[test]
    fn test_unselected_groups_are_kept() {
        let (a, b, c) = (rect(0.0), rect(10.0), rect(20.0));
        let g1 = group(&[&a]);
        let g2 = group(&[&b, &c]);
        let mut state = state_with(&[&g1, &g2]);
        state.set_selected(vec![g2.id()]);

        UngroupCommand::new(&state).run(&mut state);

        assert_eq!(ids(&state), vec![g1.id(), b.id(), c.id()]);
    }

    #[test]
    fn test_undo_restores_before_state_verbatim() {
        let (a, b) = (rect(0.0), rect(10.0));
        let g = group(&[&a, &b]);
        let mut state = state_with(&[&g]);
        state.set_selected(vec![g.id()]);

        let cmd = UngroupCommand::new(&state);
        cmd.run(&mut state);
        cmd.undo(&mut state);

        assert_eq!(ids(&state), vec![g.id()]);
        assert_eq!(state.selected().as_ref(), &[g.id()]);

        cmd.redo(&mut state);
        assert_eq!(ids(&state), vec![a.id(), b.id()]);
    }
}
