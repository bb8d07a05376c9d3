//! Editor facade: turns user intents into commands.
//!
//! The [`Editor`] owns the [`ApplicationState`], the [`History`] and a
//! [`ClipboardStore`]. Every edit is built as a command from the current state
//! and executed through the history; selection changes and tool changes are not
//! recorded.

use crate::clipboard::{ClipboardError, ClipboardStore, MemoryClipboard};
use crate::commands::{
    Command, DeleteCommand, DrawShapeCommand, GroupCommand, MoveCommand, PasteCommand,
    UngroupCommand,
};
use crate::config::EditorConfig;
use crate::history::History;
use crate::shapes::{ShapeId, ShapeRef};
use crate::state::{ApplicationState, RedrawListener};
use crate::tools::{DialogPresenter, MouseMode, ShapeType, ToolChoice, ToolDialog};
use kurbo::{Point, Rect, Vec2};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Editor errors.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// What a drag gesture did.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Drawn(ShapeId),
    Selected(Vec<ShapeId>),
    Moved,
    Nothing,
}

/// The editing session.
pub struct Editor {
    state: ApplicationState,
    history: History,
    clipboard: Box<dyn ClipboardStore>,
    config: EditorConfig,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an in-memory clipboard.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_clipboard(config, Box::new(MemoryClipboard::new()))
    }

    /// Create an editor backed by the given clipboard store.
    pub fn with_clipboard(config: EditorConfig, clipboard: Box<dyn ClipboardStore>) -> Self {
        Self {
            state: ApplicationState::new(),
            history: History::new(config.max_history),
            clipboard,
            config,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Register a redraw listener on the state.
    pub fn subscribe(&mut self, listener: Box<dyn RedrawListener + Send>) {
        self.state.subscribe(listener);
    }

    /// Run a command through the history.
    pub fn execute(&mut self, command: Box<dyn Command>) {
        self.history.execute(&mut self.state, command);
    }

    /// Draw the active tool's shape between two points.
    pub fn draw(&mut self, start: Point, end: Point) -> ShapeId {
        let kind = self.state.tools().shape_type;
        self.draw_shape(kind, start, end)
    }

    /// Draw a shape of the given kind with the active colors and shading.
    /// The active shape type is left unchanged.
    pub fn draw_shape(&mut self, kind: ShapeType, start: Point, end: Point) -> ShapeId {
        let mut tools = *self.state.tools();
        tools.shape_type = kind;
        let command = DrawShapeCommand::new(&tools, start, end);
        let id = command.shape().id();
        self.execute(Box::new(command));
        log::info!("Drew {}", kind.name());
        id
    }

    /// Handle a completed drag according to the mouse mode.
    pub fn drag(&mut self, start: Point, end: Point) -> DragOutcome {
        match self.state.tools().mouse_mode {
            MouseMode::Draw => DragOutcome::Drawn(self.draw(start, end)),
            MouseMode::Select => DragOutcome::Selected(self.select_in_rect(Rect::from_points(start, end))),
            MouseMode::Move => {
                if self.move_selected(end - start) {
                    DragOutcome::Moved
                } else {
                    DragOutcome::Nothing
                }
            }
        }
    }

    /// Select every top-level shape.
    pub fn select_all(&mut self) {
        let ids: Vec<ShapeId> = self.state.shapes().iter().map(|s| s.id()).collect();
        self.state.set_selected(ids);
    }

    pub fn clear_selection(&mut self) {
        self.state.set_selected(Vec::new());
    }

    /// Select the topmost shape under a point, or nothing.
    pub fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        let hit = self
            .state
            .shapes_at_point(point, self.config.hit_tolerance)
            .first()
            .copied();
        self.state.set_selected(hit.into_iter().collect::<Vec<_>>());
        hit
    }

    /// Select every top-level shape touching a rectangle.
    pub fn select_in_rect(&mut self, rect: Rect) -> Vec<ShapeId> {
        let ids = self.state.shapes_in_rect(rect);
        self.state.set_selected(ids.clone());
        ids
    }

    /// Translate the selection. Returns false if nothing moved.
    pub fn move_selected(&mut self, delta: Vec2) -> bool {
        let Some(command) = MoveCommand::new(&self.state, delta) else {
            return false;
        };
        self.execute(Box::new(command));
        true
    }

    /// Group the selected shapes. Returns false if fewer than two are selected.
    pub fn group(&mut self) -> bool {
        let Some(command) = GroupCommand::new(&self.state) else {
            log::info!("Select at least two shapes to group");
            return false;
        };
        self.execute(Box::new(command));
        true
    }

    /// Ungroup the selection, or every group when nothing is selected.
    /// Returns the number of groups dissolved.
    pub fn ungroup(&mut self) -> usize {
        let command = UngroupCommand::new(&self.state);
        let ungrouped = command.ungrouped();
        self.execute(Box::new(command));
        ungrouped
    }

    /// Delete the selected shapes. Returns false if nothing was selected.
    pub fn delete(&mut self) -> bool {
        let Some(command) = DeleteCommand::new(&self.state) else {
            return false;
        };
        let count = command.targets().len();
        self.execute(Box::new(command));
        log::info!("Deleted {} shapes", count);
        true
    }

    /// Copy the selected shapes to the clipboard store.
    ///
    /// The store is written before the in-memory clipboard; on failure nothing
    /// changes. Returns the number of shapes copied.
    pub fn copy(&mut self) -> EditorResult<usize> {
        let shapes = self.state.selected_shapes();
        if shapes.is_empty() {
            return Ok(0);
        }
        if let Err(e) = self.clipboard.save(&shapes) {
            log::error!("Failed to copy: {}", e);
            return Err(e.into());
        }
        let count = shapes.len();
        self.state.set_clipboard(shapes);
        log::info!("Copied {} shapes to clipboard", count);
        Ok(count)
    }

    /// Copy the selection, then delete it.
    pub fn cut(&mut self) -> EditorResult<usize> {
        let count = self.copy()?;
        if count > 0 {
            self.delete();
        }
        Ok(count)
    }

    /// Paste the clipboard store's shapes, nudged by the configured offset.
    ///
    /// The store is read before anything changes; on failure nothing changes.
    /// Returns the number of shapes pasted.
    pub fn paste(&mut self) -> EditorResult<usize> {
        let loaded = match self.clipboard.load() {
            Ok(shapes) => shapes,
            Err(e) => {
                log::error!("Failed to paste: {}", e);
                return Err(e.into());
            }
        };
        let loaded: Vec<ShapeRef> = loaded.into_iter().map(Arc::new).collect();
        self.state.set_clipboard(loaded);

        let offset = self.config.paste_vector();
        let Some(command) = PasteCommand::new(&self.state, self.state.clipboard(), offset) else {
            log::info!("Clipboard is empty");
            return Ok(0);
        };
        let count = command.pasted().len();
        self.execute(Box::new(command));
        log::info!("Pasted {} shapes", count);
        Ok(count)
    }

    /// Undo the last edit.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.state)
    }

    /// Redo the last undone edit.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.state)
    }

    /// Show a tool dialog and apply the answer.
    pub fn choose_tool(&mut self, kind: ToolDialog, presenter: &mut dyn DialogPresenter) -> bool {
        self.state.choose_tool(kind, presenter)
    }

    /// Apply a tool setting directly.
    pub fn set_tool(&mut self, choice: ToolChoice) {
        log::info!("Tool: {}", choice.label());
        self.state.set_tool_choice(choice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardResult;
    use crate::shapes::Shape;

    /// Store whose every call fails.
    struct Broken;

    impl ClipboardStore for Broken {
        fn save(&mut self, _shapes: &[ShapeRef]) -> ClipboardResult<()> {
            Err(ClipboardError::Io("disk full".to_string()))
        }

        fn load(&mut self) -> ClipboardResult<Vec<Shape>> {
            Err(ClipboardError::Unavailable("no clipboard".to_string()))
        }
    }

    fn editor_with_two() -> (Editor, ShapeId, ShapeId) {
        let mut editor = Editor::default();
        let a = editor.draw(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let b = editor.draw(Point::new(50.0, 0.0), Point::new(60.0, 10.0));
        (editor, a, b)
    }

    #[test]
    fn test_draw_records_history() {
        let (mut editor, a, _) = editor_with_two();
        assert_eq!(editor.history().undo_len(), 2);
        assert!(editor.undo());
        assert_eq!(editor.state().shapes()[0].id(), a);
        assert_eq!(editor.state().len(), 1);
    }

    #[test]
    fn test_drag_follows_mouse_mode() {
        let (mut editor, a, _) = editor_with_two();

        editor.set_tool(ToolChoice::MouseMode(MouseMode::Select));
        let outcome = editor.drag(Point::new(-1.0, -1.0), Point::new(20.0, 20.0));
        assert_eq!(outcome, DragOutcome::Selected(vec![a]));

        editor.set_tool(ToolChoice::MouseMode(MouseMode::Move));
        assert_eq!(editor.drag(Point::ZERO, Point::new(5.0, 0.0)), DragOutcome::Moved);
        let moved = editor.state().find_shape(a).unwrap().bounds();
        assert!((moved.x0 - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_uses_shape_type() {
        let mut editor = Editor::default();
        editor.set_tool(ToolChoice::ShapeType(ShapeType::Triangle));
        editor.draw(Point::ZERO, Point::new(10.0, 10.0));
        assert_eq!(editor.state().shapes()[0].kind_name(), "triangle");
    }

    #[test]
    fn test_draw_shape_keeps_active_tool() {
        let mut editor = Editor::default();
        let id = editor.draw_shape(ShapeType::Ellipse, Point::ZERO, Point::new(10.0, 10.0));

        assert_eq!(editor.state().find_shape(id).unwrap().kind_name(), "ellipse");
        assert_eq!(editor.state().tools().shape_type, ShapeType::Rectangle);
        assert_eq!(editor.history().undo_len(), 1);
    }

    #[test]
    fn test_undo_draw_after_select_all() {
        let (mut editor, a, _) = editor_with_two();
        editor.select_all();

        assert!(editor.undo());
        assert!(editor.state().selection_is_consistent());
        assert_eq!(editor.state().selected().as_ref(), &[a]);
    }

    #[test]
    fn test_select_at_picks_topmost() {
        let mut editor = Editor::default();
        editor.draw(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let top = editor.draw(Point::new(50.0, 50.0), Point::new(150.0, 150.0));

        assert_eq!(editor.select_at(Point::new(75.0, 75.0)), Some(top));
        assert_eq!(editor.select_at(Point::new(500.0, 500.0)), None);
        assert!(editor.state().selected().is_empty());
    }

    #[test]
    fn test_group_and_ungroup_round_trip() {
        let (mut editor, a, b) = editor_with_two();
        editor.select_all();
        assert!(editor.group());
        assert_eq!(editor.state().len(), 1);

        assert_eq!(editor.ungroup(), 1);
        let ids: Vec<_> = editor.state().shapes().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_copy_paste() {
        let (mut editor, a, _) = editor_with_two();
        editor.state.set_selected(vec![a]);

        assert_eq!(editor.copy().unwrap(), 1);
        assert_eq!(editor.history().undo_len(), 2);
        assert_eq!(editor.paste().unwrap(), 1);

        assert_eq!(editor.state().len(), 3);
        let pasted = editor.state().selected()[0];
        assert_ne!(pasted, a);
        let bounds = editor.state().find_shape(pasted).unwrap().bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cut_removes_and_keeps_clipboard() {
        let (mut editor, a, b) = editor_with_two();
        editor.state.set_selected(vec![a]);

        assert_eq!(editor.cut().unwrap(), 1);
        assert!(!editor.state().contains_shape(a));
        assert!(editor.state().contains_shape(b));
        assert_eq!(editor.state().clipboard()[0].id(), a);
    }

    #[test]
    fn test_copy_nothing_selected() {
        let (mut editor, _, _) = editor_with_two();
        assert_eq!(editor.copy().unwrap(), 0);
        assert!(editor.state().clipboard().is_empty());
    }

    #[test]
    fn test_paste_empty_clipboard() {
        let (mut editor, _, _) = editor_with_two();
        assert_eq!(editor.paste().unwrap(), 0);
        assert_eq!(editor.history().undo_len(), 2);
    }

    #[test]
    fn test_failed_clipboard_changes_nothing() {
        let mut editor = Editor::with_clipboard(EditorConfig::default(), Box::new(Broken));
        let a = editor.draw(Point::ZERO, Point::new(10.0, 10.0));
        editor.select_all();

        assert!(matches!(editor.copy(), Err(EditorError::Clipboard(ClipboardError::Io(_)))));
        assert!(editor.cut().is_err());
        assert!(editor.paste().is_err());

        assert_eq!(editor.state().len(), 1);
        assert_eq!(editor.state().selected().as_ref(), &[a]);
        assert!(editor.state().clipboard().is_empty());
        assert_eq!(editor.history().undo_len(), 1);
    }

    #[test]
    fn test_history_cap_from_config() {
        let config = EditorConfig {
            max_history: 1,
            ..EditorConfig::default()
        };
        let mut editor = Editor::new(config);
        editor.draw(Point::ZERO, Point::new(1.0, 1.0));
        editor.draw(Point::ZERO, Point::new(2.0, 2.0));
        assert_eq!(editor.history().undo_len(), 1);
    }
}
