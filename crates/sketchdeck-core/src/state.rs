//! Application state: the shapes on the canvas, the selection and the clipboard.
//!
//! `ApplicationState` is the single source of truth that commands mutate. Every
//! mutating call replaces one collection and then notifies each registered
//! [`RedrawListener`] exactly once, synchronously, with the post-mutation
//! state. The clipboard is invisible and never triggers a redraw.

use crate::shapes::{Shape, ShapeId, ShapeRef};
use crate::tools::{DialogPresenter, ToolChoice, ToolDialog, ToolSettings};
use kurbo::{Point, Rect};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Ordered shape sequence. Cloning shares the underlying slice.
pub type ShapeList = Arc<[ShapeRef]>;

/// Ordered, duplicate-free list of selected shape IDs.
pub type Selection = Arc<[ShapeId]>;

/// Receives a call after every visible state mutation.
///
/// Implemented by the render layer; tests use recording listeners.
pub trait RedrawListener {
    fn redraw(&mut self, state: &ApplicationState);
}

/// The canonical editor state.
pub struct ApplicationState {
    /// Top-level shapes, bottom to top.
    shapes: ShapeList,
    /// Selected shape IDs.
    selected: Selection,
    /// Shapes copied for paste.
    clipboard: ShapeList,
    /// Active tool fields.
    tools: ToolSettings,
    listeners: Vec<Box<dyn RedrawListener + Send>>,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationState")
            .field("shapes", &self.shapes.len())
            .field("selected", &self.selected)
            .field("clipboard", &self.clipboard.len())
            .field("tools", &self.tools)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ApplicationState {
    /// Create an empty state with default tool settings.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new().into(),
            selected: Vec::new().into(),
            clipboard: Vec::new().into(),
            tools: ToolSettings::default(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners run in registration order.
    pub fn subscribe(&mut self, listener: Box<dyn RedrawListener + Send>) {
        self.listeners.push(listener);
    }

    /// Top-level shapes, bottom to top.
    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    /// Selected shape IDs.
    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    /// Shapes on the clipboard.
    pub fn clipboard(&self) -> &ShapeList {
        &self.clipboard
    }

    /// Active tool fields.
    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    /// Replace the shape sequence and redraw.
    pub fn set_shapes(&mut self, shapes: impl Into<ShapeList>) {
        self.shapes = shapes.into();
        self.notify();
    }

    /// Replace the selection and redraw.
    ///
    /// Duplicate IDs are dropped, keeping the first occurrence.
    pub fn set_selected(&mut self, selected: impl Into<Selection>) {
        let selected = selected.into();
        let mut seen = HashSet::with_capacity(selected.len());
        self.selected = if selected.iter().all(|id| seen.insert(*id)) {
            selected
        } else {
            let mut seen = HashSet::with_capacity(selected.len());
            selected.iter().copied().filter(|id| seen.insert(*id)).collect()
        };
        debug_assert!(
            self.selection_is_consistent(),
            "selection references shapes that are not on the canvas"
        );
        self.notify();
    }

    /// Append a shape on top of the z-order and redraw.
    pub fn add_shape(&mut self, shape: ShapeRef) {
        let mut shapes = Vec::with_capacity(self.shapes.len() + 1);
        shapes.extend(self.shapes.iter().cloned());
        shapes.push(shape);
        self.shapes = shapes.into();
        self.notify();
    }

    /// Remove a top-level shape and redraw.
    ///
    /// Redraws even when `id` is not present; returns the removed shape.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<ShapeRef> {
        let removed = self.shapes.iter().find(|s| s.id() == id).cloned();
        if removed.is_some() {
            self.shapes = self
                .shapes
                .iter()
                .filter(|s| s.id() != id)
                .cloned()
                .collect();
        }
        self.notify();
        removed
    }

    /// Replace the clipboard. Does not redraw.
    pub fn set_clipboard(&mut self, clipboard: impl Into<ShapeList>) {
        self.clipboard = clipboard.into();
    }

    /// Apply a tool dialog answer. Does not redraw.
    pub fn set_tool_choice(&mut self, choice: ToolChoice) {
        self.tools.apply(choice);
    }

    /// Show a tool dialog and apply the answer. Does not redraw.
    pub fn choose_tool(&mut self, kind: ToolDialog, presenter: &mut dyn DialogPresenter) -> bool {
        self.tools.choose(kind, presenter)
    }

    fn notify(&mut self) {
        log::trace!(
            "Redraw: {} shapes, {} selected, {} listeners",
            self.shapes.len(),
            self.selected.len(),
            self.listeners.len()
        );
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener.redraw(self);
        }
        self.listeners = listeners;
    }

    /// Number of top-level shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the canvas has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Find a shape by ID, searching inside groups.
    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find_map(|s| s.find(id))
    }

    /// Whether a shape is on the canvas, at top level or inside a group.
    pub fn contains_shape(&self, id: ShapeId) -> bool {
        self.find_shape(id).is_some()
    }

    /// Z-index of a top-level shape.
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    /// Check if a shape is selected.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected top-level shapes, in z-order.
    pub fn selected_shapes(&self) -> Vec<ShapeRef> {
        self.shapes
            .iter()
            .filter(|s| self.is_selected(s.id()))
            .cloned()
            .collect()
    }

    /// Whether every selected ID is reachable from the shape sequence.
    pub fn selection_is_consistent(&self) -> bool {
        self.selected.iter().all(|&id| self.contains_shape(id))
    }

    /// Find top-level shapes at a point, front to back.
    pub fn shapes_at_point(&self, point: Point, tolerance: f64) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .filter(|s| s.hit_test(point, tolerance))
            .map(|s| s.id())
            .collect()
    }

    /// Find top-level shapes whose bounds intersect a rectangle, in z-order.
    pub fn shapes_in_rect(&self, rect: Rect) -> Vec<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| rect.intersect(s.bounds().inflate(1.0, 1.0)).area() > 0.0)
            .map(|s| s.id())
            .collect()
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(|s| s.bounds())
            .reduce(|acc, b| acc.union(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Group, Rectangle, ShapeTrait};
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<(usize, usize)>>>;

    /// Records (shape count, selection count) at each redraw.
    struct Recorder(Log);

    impl RedrawListener for Recorder {
        fn redraw(&mut self, state: &ApplicationState) {
            self.0
                .lock()
                .unwrap()
                .push((state.shapes().len(), state.selected().len()));
        }
    }

    fn recorded_state() -> (ApplicationState, Log) {
        let log = Log::default();
        let mut state = ApplicationState::new();
        state.subscribe(Box::new(Recorder(Arc::clone(&log))));
        (state, log)
    }

    fn rect_at(x: f64) -> ShapeRef {
        Arc::new(Rectangle::new(Point::new(x, 0.0), 10.0, 10.0).into())
    }

    #[test]
    fn test_each_mutation_redraws_once_with_new_state() {
        let (mut state, log) = recorded_state();
        let a = rect_at(0.0);
        let b = rect_at(20.0);

        state.set_shapes(vec![Arc::clone(&a)]);
        assert_eq!(*log.lock().unwrap(), vec![(1, 0)]);

        state.add_shape(Arc::clone(&b));
        assert_eq!(log.lock().unwrap().last(), Some(&(2, 0)));

        state.set_selected(vec![a.id(), b.id()]);
        assert_eq!(log.lock().unwrap().last(), Some(&(2, 2)));

        state.set_selected(Vec::new());
        state.remove_shape(b.id());
        assert_eq!(log.lock().unwrap().last(), Some(&(1, 0)));
        assert_eq!(log.lock().unwrap().len(), 5);
    }

    #[test]
    fn test_clipboard_does_not_redraw() {
        let (mut state, log) = recorded_state();
        state.set_clipboard(vec![rect_at(0.0)]);
        assert_eq!(state.clipboard().len(), 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_shape_still_redraws() {
        let (mut state, log) = recorded_state();
        assert!(state.remove_shape(uuid::Uuid::new_v4()).is_none());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_set_selected_drops_duplicates() {
        let mut state = ApplicationState::new();
        let a = rect_at(0.0);
        state.set_shapes(vec![Arc::clone(&a)]);
        state.set_selected(vec![a.id(), a.id()]);
        assert_eq!(state.selected().len(), 1);
    }

    #[test]
    fn test_nested_shapes_are_reachable() {
        let mut state = ApplicationState::new();
        let inner = rect_at(0.0);
        let group = Group::new(vec![Arc::clone(&inner)]);
        state.set_shapes(vec![Arc::new(group.into())]);

        assert!(state.contains_shape(inner.id()));
        assert!(state.index_of(inner.id()).is_none());
    }

    #[test]
    fn test_shapes_at_point_front_to_back() {
        let mut state = ApplicationState::new();
        let back = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0);
        let front = Rectangle::new(Point::new(50.0, 50.0), 100.0, 100.0);
        let (back_id, front_id) = (back.id(), front.id());
        state.set_shapes(vec![Arc::new(back.into()), Arc::new(front.into())]);

        assert_eq!(state.shapes_at_point(Point::new(75.0, 75.0), 0.0), vec![front_id, back_id]);
        assert_eq!(state.shapes_at_point(Point::new(25.0, 25.0), 0.0), vec![back_id]);
    }

    #[test]
    fn test_shapes_in_rect() {
        let mut state = ApplicationState::new();
        let a = rect_at(0.0);
        let b = rect_at(200.0);
        state.set_shapes(vec![Arc::clone(&a), Arc::clone(&b)]);

        let hits = state.shapes_in_rect(Rect::new(-5.0, -5.0, 50.0, 50.0));
        assert_eq!(hits, vec![a.id()]);
        assert_eq!(state.bounds(), Some(Rect::new(0.0, 0.0, 210.0, 10.0)));
    }
}
