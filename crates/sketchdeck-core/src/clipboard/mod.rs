//! Clipboard stores for copied shapes.
//!
//! Copy and paste go through a [`ClipboardStore`] so the copied shapes can
//! outlive the process or be shared with other windows. Payloads are JSON.

mod file;
mod memory;

pub use file::FileClipboard;
pub use memory::MemoryClipboard;

use crate::shapes::{Shape, ShapeRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clipboard errors.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Backend that holds copied shapes between a copy and a paste.
///
/// Implementations must be Send so an editor can move across threads.
pub trait ClipboardStore: Send {
    /// Replace the stored shapes.
    fn save(&mut self, shapes: &[ShapeRef]) -> ClipboardResult<()>;

    /// Read the stored shapes. An empty clipboard loads as an empty list.
    fn load(&mut self) -> ClipboardResult<Vec<Shape>>;
}

/// Marker so foreign JSON is not mistaken for a shape payload.
const PAYLOAD_KIND: &str = "sketchdeck/shapes";

#[derive(Serialize)]
struct PayloadRef<'a> {
    kind: &'a str,
    shapes: &'a [ShapeRef],
}

#[derive(Deserialize)]
struct Payload {
    kind: String,
    shapes: Vec<Shape>,
}

/// Serialize shapes into a clipboard payload.
pub fn to_json(shapes: &[ShapeRef]) -> ClipboardResult<String> {
    serde_json::to_string(&PayloadRef {
        kind: PAYLOAD_KIND,
        shapes,
    })
    .map_err(|e| ClipboardError::Serialization(e.to_string()))
}

/// Parse a clipboard payload produced by [`to_json`].
pub fn from_json(json: &str) -> ClipboardResult<Vec<Shape>> {
    let payload: Payload =
        serde_json::from_str(json).map_err(|e| ClipboardError::Serialization(e.to_string()))?;
    if payload.kind != PAYLOAD_KIND {
        return Err(ClipboardError::Serialization(format!(
            "Unexpected payload kind: {}",
            payload.kind
        )));
    }
    Ok(payload.shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Ellipse, Group, Rectangle};
    use kurbo::Point;
    use std::sync::Arc;

    #[test]
    fn test_payload_keeps_nested_groups() {
        let inner: ShapeRef = Arc::new(Ellipse::new(Point::new(5.0, 5.0), 3.0, 2.0).into());
        let group: ShapeRef = Arc::new(Group::new(vec![inner]).into());
        let rect: ShapeRef = Arc::new(Rectangle::new(Point::ZERO, 4.0, 4.0).into());

        let json = to_json(&[Arc::clone(&group), Arc::clone(&rect)]).unwrap();
        let loaded = from_json(&json).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(&loaded[0], group.as_ref());
        assert_eq!(&loaded[1], rect.as_ref());
    }

    #[test]
    fn test_rejects_foreign_json() {
        assert!(matches!(
            from_json("{\"kind\":\"other\",\"shapes\":[]}"),
            Err(ClipboardError::Serialization(_))
        ));
        assert!(matches!(from_json("hello"), Err(ClipboardError::Serialization(_))));
    }
}
