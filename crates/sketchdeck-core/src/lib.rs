//! SketchDeck Core Library
//!
//! Shape model, application state, reversible commands and the undo/redo
//! history for the SketchDeck drawing editor. Rendering and input live in
//! other crates and attach through [`RedrawListener`] and [`DialogPresenter`].

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod history;
pub mod shapes;
pub mod state;
pub mod tools;

pub use clipboard::{ClipboardError, ClipboardResult, ClipboardStore, FileClipboard, MemoryClipboard};
pub use commands::{Command, Snapshot};
pub use config::{ConfigError, ConfigResult, EditorConfig};
pub use editor::{DragOutcome, Editor, EditorError, EditorResult};
pub use history::History;
pub use shapes::{Shape, ShapeId, ShapeRef, ShapeStyle, ShapeTrait};
pub use state::{ApplicationState, RedrawListener, Selection, ShapeList};
pub use tools::{DialogPresenter, DialogSpec, MouseMode, ShapeType, ToolChoice, ToolDialog, ToolSettings};
