//! SketchDeck Application
//!
//! Console shell that reads user actions, drives the editor and paints
//! every state change through a logging painter.

mod app;
mod console;
mod shortcuts;
mod ui;

#[cfg(feature = "native")]
mod system_clipboard;

pub use app::{App, Flow};
pub use console::{ConsolePresenter, InlinePresenter, LogPainter, pick};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{ParseError, UiAction};

#[cfg(feature = "native")]
pub use system_clipboard::SystemClipboard;
