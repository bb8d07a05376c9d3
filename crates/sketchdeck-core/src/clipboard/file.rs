//! File-backed clipboard for native platforms.

use super::{ClipboardError, ClipboardResult, ClipboardStore, from_json, to_json};
use crate::shapes::{Shape, ShapeRef};
use std::fs;
use std::path::{Path, PathBuf};

/// Clipboard stored as a JSON file, shared by every editor using the same path.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    /// Use the given file. Its parent directory is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a file clipboard in the default location.
    ///
    /// On Unix: `~/.local/share/sketchdeck/clipboard.json`
    /// On Windows: `%LOCALAPPDATA%\sketchdeck\clipboard.json`
    pub fn default_location() -> ClipboardResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                ClipboardError::Unavailable("Could not determine home directory".to_string())
            })?;
        Ok(Self::new(base.join("sketchdeck").join("clipboard.json")))
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClipboardStore for FileClipboard {
    fn save(&mut self, shapes: &[ShapeRef]) -> ClipboardResult<()> {
        let json = to_json(shapes)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.exists()) {
            fs::create_dir_all(parent).map_err(|e| {
                ClipboardError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        fs::write(&self.path, json).map_err(|e| {
            ClipboardError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn load(&mut self) -> ClipboardResult<Vec<Shape>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| {
            ClipboardError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        from_json(&json)
    }
}
