//! Rectangle shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Affine, BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub style: ShapeStyle,
}

impl Rectangle {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    /// The rectangle spanned by a drag, in any direction.
    pub fn from_corners(start: Point, end: Point) -> Self {
        let rect = Rect::from_points(start, end);
        Self::new(rect.origin(), rect.width(), rect.height())
    }

    /// Replace the style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    /// Filled rectangles are hit anywhere inside; outlines only near the border.
    /// Either way the reach extends past the edge by the tolerance plus half
    /// the stroke.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = tolerance + self.style.stroke_width / 2.0;
        let rect = self.as_rect();
        if !rect.inflate(reach, reach).contains(point) {
            return false;
        }
        self.style.shading.fills() || !rect.inflate(-reach, -reach).contains(point)
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn transform(&mut self, affine: Affine) {
        // Translation and axis scaling only
        let [sx, _, _, sy, _, _] = affine.as_coeffs();
        self.position = affine * self.position;
        self.width *= sx.abs();
        self.height *= sy.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShadingType, ShapeColor};

    fn square(shading: ShadingType) -> Rectangle {
        Rectangle::new(Point::ZERO, 100.0, 100.0)
            .with_style(ShapeStyle::new(ShapeColor::Red, ShapeColor::Black, shading))
    }

    #[test]
    fn test_drag_up_and_left() {
        let rect = Rectangle::from_corners(Point::new(100.0, 80.0), Point::new(40.0, 20.0));
        assert_eq!(rect.as_rect(), Rect::new(40.0, 20.0, 100.0, 80.0));
    }

    #[test]
    fn test_filled_reach_includes_half_stroke() {
        let rect = square(ShadingType::Filled);
        assert!(rect.hit_test(Point::new(50.0, 50.0), 0.0));
        // stroke 2.0: one unit of reach past the edge with no tolerance
        assert!(rect.hit_test(Point::new(100.5, 50.0), 0.0));
        assert!(!rect.hit_test(Point::new(101.5, 50.0), 0.0));
        assert!(rect.hit_test(Point::new(104.0, 50.0), 4.0));
        assert!(!rect.hit_test(Point::new(106.0, 50.0), 4.0));
    }

    #[test]
    fn test_outline_hits_only_the_band() {
        let rect = square(ShadingType::Outline);
        assert!(!rect.hit_test(Point::new(50.0, 50.0), 4.0));
        assert!(rect.hit_test(Point::new(4.0, 50.0), 4.0));
        assert!(rect.hit_test(Point::new(-4.0, 50.0), 4.0));
        assert!(!rect.hit_test(Point::new(6.0, 50.0), 4.0));
    }

    #[test]
    fn test_filled_outline_hits_interior() {
        let rect = square(ShadingType::FilledOutline);
        assert!(rect.hit_test(Point::new(50.0, 50.0), 0.0));
        assert!(rect.hit_test(Point::new(0.0, 50.0), 0.0));
    }

    #[test]
    fn test_translate_keeps_size() {
        let mut rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0);
        rect.transform(Affine::translate((5.0, -5.0)));
        assert_eq!(rect.bounds(), Rect::new(15.0, 15.0, 115.0, 65.0));
    }
}
