//! Clipboard store backed by the operating system clipboard.

use sketchdeck_core::clipboard::{self, ClipboardError, ClipboardResult, ClipboardStore};
use sketchdeck_core::{Shape, ShapeRef};

/// Stores shapes as JSON text on the system clipboard.
///
/// A handle is opened per call so the store stays `Send` on every platform.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open() -> ClipboardResult<arboard::Clipboard> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardStore for SystemClipboard {
    fn save(&mut self, shapes: &[ShapeRef]) -> ClipboardResult<()> {
        let json = clipboard::to_json(shapes)?;
        Self::open()?
            .set_text(json)
            .map_err(|e| ClipboardError::Io(e.to_string()))
    }

    fn load(&mut self) -> ClipboardResult<Vec<Shape>> {
        match Self::open()?.get_text() {
            Ok(text) => match clipboard::from_json(&text) {
                Ok(shapes) => Ok(shapes),
                Err(e) => {
                    // Text from another application
                    log::debug!("Clipboard holds no shapes: {}", e);
                    Ok(Vec::new())
                }
            },
            Err(arboard::Error::ContentNotAvailable) => Ok(Vec::new()),
            Err(e) => Err(ClipboardError::Io(e.to_string())),
        }
    }
}
