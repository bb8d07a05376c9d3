//! Shape definitions for the canvas.
//!
//! Leaf shapes carry geometry and a [`ShapeStyle`]; a [`Group`] owns an
//! ordered list of child shapes. Shapes are shared through [`ShapeRef`] so
//! that history snapshots can hold the same shapes as the live state.

mod ellipse;
mod group;
mod rectangle;
mod triangle;

pub use ellipse::Ellipse;
pub use group::Group;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use kurbo::{Affine, BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Shared, immutable handle to a shape.
///
/// Edits never touch a shape behind a `ShapeRef` in place; they clone it
/// (see [`Arc::make_mut`]) and install the new value in a fresh sequence.
pub type ShapeRef = Arc<Shape>;

/// Palette colors offered by the color dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeColor {
    Black,
    Blue,
    Cyan,
    DarkGray,
    Gray,
    Green,
    LightGray,
    Magenta,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
}

impl ShapeColor {
    /// Every palette entry, in dialog order.
    pub const ALL: [ShapeColor; 13] = [
        ShapeColor::Black,
        ShapeColor::Blue,
        ShapeColor::Cyan,
        ShapeColor::DarkGray,
        ShapeColor::Gray,
        ShapeColor::Green,
        ShapeColor::LightGray,
        ShapeColor::Magenta,
        ShapeColor::Orange,
        ShapeColor::Pink,
        ShapeColor::Red,
        ShapeColor::White,
        ShapeColor::Yellow,
    ];

    /// RGBA8 components of this palette entry.
    pub fn rgba8(self) -> [u8; 4] {
        match self {
            ShapeColor::Black => [0, 0, 0, 255],
            ShapeColor::Blue => [0, 0, 255, 255],
            ShapeColor::Cyan => [0, 255, 255, 255],
            ShapeColor::DarkGray => [64, 64, 64, 255],
            ShapeColor::Gray => [128, 128, 128, 255],
            ShapeColor::Green => [0, 255, 0, 255],
            ShapeColor::LightGray => [192, 192, 192, 255],
            ShapeColor::Magenta => [255, 0, 255, 255],
            ShapeColor::Orange => [255, 200, 0, 255],
            ShapeColor::Pink => [255, 175, 175, 255],
            ShapeColor::Red => [255, 0, 0, 255],
            ShapeColor::White => [255, 255, 255, 255],
            ShapeColor::Yellow => [255, 255, 0, 255],
        }
    }

    /// Get the palette entry as a peniko Color.
    pub fn to_color(self) -> Color {
        let [r, g, b, a] = self.rgba8();
        Color::from_rgba8(r, g, b, a)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeColor::Black => "Black",
            ShapeColor::Blue => "Blue",
            ShapeColor::Cyan => "Cyan",
            ShapeColor::DarkGray => "Dark Gray",
            ShapeColor::Gray => "Gray",
            ShapeColor::Green => "Green",
            ShapeColor::LightGray => "Light Gray",
            ShapeColor::Magenta => "Magenta",
            ShapeColor::Orange => "Orange",
            ShapeColor::Pink => "Pink",
            ShapeColor::Red => "Red",
            ShapeColor::White => "White",
            ShapeColor::Yellow => "Yellow",
        }
    }
}

/// How a leaf shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShadingType {
    /// Interior filled with the primary color.
    #[default]
    Filled,
    /// Border stroked with the primary color.
    Outline,
    /// Interior filled with the primary color, border stroked with the secondary.
    FilledOutline,
}

impl ShadingType {
    /// Every shading mode, in dialog order.
    pub const ALL: [ShadingType; 3] = [
        ShadingType::Filled,
        ShadingType::Outline,
        ShadingType::FilledOutline,
    ];

    /// Whether the interior is painted.
    pub fn fills(self) -> bool {
        matches!(self, ShadingType::Filled | ShadingType::FilledOutline)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ShadingType::Filled => "Filled In",
            ShadingType::Outline => "Outline",
            ShadingType::FilledOutline => "Outline And Filled In",
        }
    }
}

/// Style properties for leaf shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color, or the stroke color for outline-only shapes.
    pub primary: ShapeColor,
    /// Stroke color when both fill and outline are painted.
    pub secondary: ShapeColor,
    /// Shading mode.
    #[serde(default)]
    pub shading: ShadingType,
    /// Stroke width.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_stroke_width() -> f64 {
    2.0
}

impl ShapeStyle {
    /// Create a style with the default stroke width.
    pub fn new(primary: ShapeColor, secondary: ShapeColor, shading: ShadingType) -> Self {
        Self {
            primary,
            secondary,
            shading,
            stroke_width: default_stroke_width(),
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new(ShapeColor::Blue, ShapeColor::Green, ShadingType::Filled)
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in world coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Apply a transform to this shape.
    fn transform(&mut self, affine: Affine);
}

/// A canvas item: either a leaf shape or a group of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Group(Group),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Triangle(s) => s.id(),
            Shape::Group(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Triangle(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.hit_test(point, tolerance),
            Shape::Ellipse(s) => s.hit_test(point, tolerance),
            Shape::Triangle(s) => s.hit_test(point, tolerance),
            Shape::Group(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Rectangle(s) => s.to_path(),
            Shape::Ellipse(s) => s.to_path(),
            Shape::Triangle(s) => s.to_path(),
            Shape::Group(s) => s.to_path(),
        }
    }

    pub fn transform(&mut self, affine: Affine) {
        match self {
            Shape::Rectangle(s) => s.transform(affine),
            Shape::Ellipse(s) => s.transform(affine),
            Shape::Triangle(s) => s.transform(affine),
            Shape::Group(s) => s.transform(affine),
        }
    }

    /// Get the style of a leaf shape. Groups have none.
    pub fn style(&self) -> Option<&ShapeStyle> {
        match self {
            Shape::Rectangle(s) => Some(&s.style),
            Shape::Ellipse(s) => Some(&s.style),
            Shape::Triangle(s) => Some(&s.style),
            Shape::Group(_) => None,
        }
    }

    /// Short kind label for logs and listings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Triangle(_) => "triangle",
            Shape::Group(_) => "group",
        }
    }

    /// Check if this shape is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group(_))
    }

    /// Get the group if this shape is a group.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Whether `id` is this shape or one of its descendants.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.find(id).is_some()
    }

    /// Find this shape or a descendant by ID.
    pub fn find(&self, id: ShapeId) -> Option<&Shape> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Shape::Group(g) => g.find_shape(id),
            _ => None,
        }
    }

    /// Give this shape, and every descendant of a group, a fresh identifier.
    /// Used when pasting so copies never share IDs with their source.
    pub fn regenerate_ids(&mut self) {
        let new_id = Uuid::new_v4();
        match self {
            Shape::Rectangle(s) => s.id = new_id,
            Shape::Ellipse(s) => s.id = new_id,
            Shape::Triangle(s) => s.id = new_id,
            Shape::Group(g) => {
                g.id = new_id;
                for child in &mut g.children {
                    Arc::make_mut(child).regenerate_ids();
                }
            }
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Shape::Ellipse(shape)
    }
}

impl From<Triangle> for Shape {
    fn from(shape: Triangle) -> Self {
        Shape::Triangle(shape)
    }
}

impl From<Group> for Shape {
    fn from(shape: Group) -> Self {
        Shape::Group(shape)
    }
}
