//! Ellipse shape.

use super::{ShapeId, ShapeStyle, ShapeTrait};
use kurbo::{Affine, BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub style: ShapeStyle,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius_x,
            radius_y,
            style: ShapeStyle::default(),
        }
    }

    /// The ellipse inscribed in the rectangle spanned by a drag.
    pub fn from_corners(start: Point, end: Point) -> Self {
        let rect = Rect::from_points(start, end);
        Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0)
    }

    /// Replace the style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::new(self.center, (self.radius_x, self.radius_y), 0.0)
    }

    /// Whether `offset` from the center lies within radii grown by `grow`.
    /// A radius that shrinks to nothing contains no point.
    fn within(&self, offset: Vec2, grow: f64) -> bool {
        let rx = self.radius_x + grow;
        let ry = self.radius_y + grow;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        (offset.x / rx).powi(2) + (offset.y / ry).powi(2) <= 1.0
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, (self.radius_x * 2.0, self.radius_y * 2.0))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = tolerance + self.style.stroke_width / 2.0;
        let offset = point - self.center;
        if !self.within(offset, reach) {
            return false;
        }
        // Outlines are hollow inside the band
        self.style.shading.fills() || !self.within(offset, -reach)
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn transform(&mut self, affine: Affine) {
        let [sx, _, _, sy, _, _] = affine.as_coeffs();
        self.center = affine * self.center;
        self.radius_x *= sx.abs();
        self.radius_y *= sy.abs();
    }
}
