//! Draw: append one new leaf shape.

use super::Command;
use crate::shapes::{Ellipse, Rectangle, Shape, ShapeRef, Triangle};
use crate::state::ApplicationState;
use crate::tools::{ShapeType, ToolSettings};
use kurbo::Point;
use std::sync::Arc;

/// Adds a shape on top of the z-order; undo removes it again.
///
/// The new shape is not selected by `run`, but it may have been selected
/// since, so `undo` also drops it from the selection.
#[derive(Debug)]
pub struct DrawShapeCommand {
    shape: ShapeRef,
}

impl DrawShapeCommand {
    /// Build the shape the active tool produces for a drag from `start` to `end`.
    pub fn new(tools: &ToolSettings, start: Point, end: Point) -> Self {
        let style = tools.style();
        let shape: Shape = match tools.shape_type {
            ShapeType::Rectangle => Rectangle::from_corners(start, end).with_style(style).into(),
            ShapeType::Ellipse => Ellipse::from_corners(start, end).with_style(style).into(),
            ShapeType::Triangle => Triangle::from_corners(start, end).with_style(style).into(),
        };
        Self::from_shape(Arc::new(shape))
    }

    /// Wrap an already built shape.
    pub fn from_shape(shape: ShapeRef) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &ShapeRef {
        &self.shape
    }
}

impl Command for DrawShapeCommand {
    fn run(&self, state: &mut ApplicationState) {
        state.add_shape(Arc::clone(&self.shape));
    }

    fn undo(&self, state: &mut ApplicationState) {
        let id = self.shape.id();
        state.remove_shape(id);
        if state.is_selected(id) {
            let selected: Vec<_> = state.selected().iter().copied().filter(|s| *s != id).collect();
            state.set_selected(selected);
        }
    }

    fn description(&self) -> &str {
        "Draw shape"
    }
}
