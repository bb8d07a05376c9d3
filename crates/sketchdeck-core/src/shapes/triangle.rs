//! Triangle shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, point_to_polyline_dist};
use kurbo::{Affine, BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A triangle defined by three vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    /// Vertices in drawing order.
    pub points: [Point; 3],
    /// Style properties.
    pub style: ShapeStyle,
}

impl Triangle {
    /// Create a triangle from three vertices.
    pub fn new(points: [Point; 3]) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            style: ShapeStyle::default(),
        }
    }

    /// Create the right triangle spanned by a drag from `start` to `end`.
    ///
    /// The right angle sits below (or above) the start point, at `(start.x, end.y)`.
    pub fn from_corners(start: Point, end: Point) -> Self {
        Self::new([start, Point::new(start.x, end.y), end])
    }

    /// Replace the style.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether a point lies inside the triangle (edges included).
    fn contains(&self, point: Point) -> bool {
        let [a, b, c] = self.points;
        let cross = |o: Point, p: Point, q: Point| (p.x - o.x) * (q.y - o.y) - (p.y - o.y) * (q.x - o.x);
        let d1 = cross(a, b, point);
        let d2 = cross(b, c, point);
        let d3 = cross(c, a, point);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    fn closed_outline(&self) -> [Point; 4] {
        let [a, b, c] = self.points;
        [a, b, c, a]
    }
}

impl ShapeTrait for Triangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let [a, b, c] = self.points;
        Rect::from_points(a, b).union_pt(c)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let edge_dist = point_to_polyline_dist(point, &self.closed_outline());
        let on_edge = edge_dist <= tolerance + self.style.stroke_width / 2.0;
        if self.style.shading.fills() {
            on_edge || self.contains(point)
        } else {
            on_edge
        }
    }

    fn to_path(&self) -> BezPath {
        let [a, b, c] = self.points;
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        path
    }

    fn transform(&mut self, affine: Affine) {
        for point in &mut self.points {
            *point = affine * *point;
        }
    }
}
