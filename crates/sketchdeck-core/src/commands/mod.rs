//! Reversible edit commands.
//!
//! A command is built from the state at the moment of user intent. It captures
//! a *before* snapshot and computes its *after* result up front, so `run`,
//! `undo` and `redo` only install precomputed values through the
//! `ApplicationState` mutation calls. Commands never change after construction.

mod delete;
mod draw;
mod group;
mod move_shapes;
mod paste;
mod ungroup;

pub use delete::DeleteCommand;
pub use draw::DrawShapeCommand;
pub use group::GroupCommand;
pub use move_shapes::MoveCommand;
pub use paste::PasteCommand;
pub use ungroup::UngroupCommand;

use crate::state::{ApplicationState, Selection, ShapeList};
use std::fmt;

/// An encapsulated, reversible state transition.
pub trait Command: fmt::Debug + Send {
    /// Apply the transition.
    fn run(&self, state: &mut ApplicationState);

    /// Restore the state captured at construction.
    fn undo(&self, state: &mut ApplicationState);

    /// Re-apply the transition after an undo.
    fn redo(&self, state: &mut ApplicationState) {
        self.run(state);
    }

    /// Human-readable label for menus and logs.
    fn description(&self) -> &str;
}

/// Shapes and selection captured at one point in time.
///
/// Both collections are shared slices, so capturing is a pair of pointer copies.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub shapes: ShapeList,
    pub selected: Selection,
}

impl Snapshot {
    /// Capture the current shapes and selection.
    pub fn capture(state: &ApplicationState) -> Self {
        Self {
            shapes: state.shapes().clone(),
            selected: state.selected().clone(),
        }
    }

    /// Install this snapshot: shapes first, then the selection.
    pub fn restore(&self, state: &mut ApplicationState) {
        state.set_shapes(self.shapes.clone());
        state.set_selected(self.selected.clone());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::shapes::{Group, Rectangle, ShapeRef};
    use crate::state::ApplicationState;
    use kurbo::Point;
    use std::sync::Arc;

    pub fn rect(x: f64) -> ShapeRef {
        Arc::new(Rectangle::new(Point::new(x, 0.0), 10.0, 10.0).into())
    }

    pub fn group(children: &[&ShapeRef]) -> ShapeRef {
        Arc::new(Group::new(children.iter().map(|c| Arc::clone(c)).collect()).into())
    }

    pub fn state_with(shapes: &[&ShapeRef]) -> ApplicationState {
        let mut state = ApplicationState::new();
        state.set_shapes(shapes.iter().map(|s| Arc::clone(s)).collect::<Vec<_>>());
        state
    }

    pub fn ids(state: &ApplicationState) -> Vec<uuid::Uuid> {
        state.shapes().iter().map(|s| s.id()).collect()
    }
}
