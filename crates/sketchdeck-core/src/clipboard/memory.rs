//! In-memory clipboard.

use super::{ClipboardResult, ClipboardStore};
use crate::shapes::{Shape, ShapeRef};

/// Process-local clipboard, used by default and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    shapes: Vec<ShapeRef>,
}

impl MemoryClipboard {
    /// Create a new empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardStore for MemoryClipboard {
    fn save(&mut self, shapes: &[ShapeRef]) -> ClipboardResult<()> {
        self.shapes = shapes.to_vec();
        Ok(())
    }

    fn load(&mut self) -> ClipboardResult<Vec<Shape>> {
        Ok(self.shapes.iter().map(|s| s.as_ref().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;
    use kurbo::Point;
    use std::sync::Arc;

    #[test]
    fn test_save_and_load() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.load().unwrap().is_empty());

        let shape: ShapeRef = Arc::new(Rectangle::new(Point::ZERO, 1.0, 1.0).into());
        clipboard.save(&[Arc::clone(&shape)]).unwrap();

        assert_eq!(clipboard.load().unwrap(), vec![shape.as_ref().clone()]);
    }

    #[test]
    fn test_save_replaces_contents() {
        let mut clipboard = MemoryClipboard::new();
        let shape: ShapeRef = Arc::new(Rectangle::new(Point::ZERO, 1.0, 1.0).into());
        clipboard.save(&[Arc::clone(&shape), Arc::clone(&shape)]).unwrap();
        clipboard.save(&[]).unwrap();
        assert!(clipboard.load().unwrap().is_empty());
    }
}
