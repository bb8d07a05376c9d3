//! Paste: insert copies of clipboard shapes.

use super::{Command, Snapshot};
use crate::shapes::{Shape, ShapeRef};
use crate::state::ApplicationState;
use kurbo::{Affine, Vec2};
use std::sync::Arc;

/// Adds fresh copies of the clipboard shapes on top and selects them.
#[derive(Debug)]
pub struct PasteCommand {
    before: Snapshot,
    pasted: Vec<ShapeRef>,
}

impl PasteCommand {
    /// Build the command from `clipboard`, nudged by `offset`.
    ///
    /// Every pasted shape, including group descendants, gets a new ID.
    /// Returns `None` for an empty clipboard.
    pub fn new(state: &ApplicationState, clipboard: &[ShapeRef], offset: Vec2) -> Option<Self> {
        if clipboard.is_empty() {
            return None;
        }
        let nudge = Affine::translate(offset);
        let pasted = clipboard
            .iter()
            .map(|shape| {
                let mut copy: Shape = shape.as_ref().clone();
                copy.regenerate_ids();
                copy.transform(nudge);
                Arc::new(copy)
            })
            .collect();
        Some(Self {
            before: Snapshot::capture(state),
            pasted,
        })
    }

    /// The shapes `run` adds.
    pub fn pasted(&self) -> &[ShapeRef] {
        &self.pasted
    }
}

impl Command for PasteCommand {
    fn run(&self, state: &mut ApplicationState) {
        for shape in &self.pasted {
            state.add_shape(Arc::clone(shape));
        }
        state.set_selected(self.pasted.iter().map(|s| s.id()).collect::<Vec<_>>());
    }

    fn undo(&self, state: &mut ApplicationState) {
        self.before.restore(state);
    }

    fn description(&self) -> &str {
        "Paste"
    }
}
