//! Group shape for combining multiple shapes.

use super::{Shape, ShapeId, ShapeRef, ShapeTrait};
use kurbo::{Affine, BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A group of shapes that can be manipulated as a single unit.
/// Groups can contain other groups, enabling nested hierarchies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub(crate) id: ShapeId,
    /// Child shapes in this group, bottom to top.
    pub children: Vec<ShapeRef>,
}

impl Group {
    /// Create a new group from a list of shapes.
    pub fn new(children: Vec<ShapeRef>) -> Self {
        Self {
            id: Uuid::new_v4(),
            children,
        }
    }

    /// Get the children of this group.
    pub fn children(&self) -> &[ShapeRef] {
        &self.children
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find a shape by ID within this group (including nested groups).
    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.children.iter().find_map(|child| child.find(id))
    }
}

impl ShapeTrait for Group {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        let mut children = self.children.iter();
        let Some(first) = children.next() else {
            return Rect::ZERO;
        };
        children.fold(first.bounds(), |bounds, child| bounds.union(child.bounds()))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Hit if any child is hit
        self.children
            .iter()
            .any(|child| child.hit_test(point, tolerance))
    }

    fn to_path(&self) -> BezPath {
        // Combine all children's paths
        let mut path = BezPath::new();
        for child in &self.children {
            path.extend(child.to_path());
        }
        path
    }

    fn transform(&mut self, affine: Affine) {
        // Children may be shared with history snapshots: copy on write
        for child in &mut self.children {
            Arc::make_mut(child).transform(affine);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> ShapeRef {
        Arc::new(Rectangle::new(Point::new(x, y), w, h).into())
    }

    #[test]
    fn test_group_bounds() {
        let group = Group::new(vec![rect(0.0, 0.0, 100.0, 50.0), rect(200.0, 200.0, 50.0, 100.0)]);
        let bounds = group.bounds();

        assert!((bounds.x0 - 0.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 0.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 250.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_group_bounds() {
        assert_eq!(Group::new(Vec::new()).bounds(), Rect::ZERO);
    }

    #[test]
    fn test_group_hit_test() {
        let group = Group::new(vec![rect(0.0, 0.0, 100.0, 50.0), rect(200.0, 200.0, 50.0, 100.0)]);

        assert!(group.hit_test(Point::new(50.0, 25.0), 0.0));
        assert!(group.hit_test(Point::new(225.0, 250.0), 0.0));
        // Empty space between children
        assert!(!group.hit_test(Point::new(150.0, 100.0), 0.0));
    }

    #[test]
    fn test_nested_groups() {
        let leaf = rect(0.0, 0.0, 100.0, 50.0);
        let inner = Group::new(vec![Arc::clone(&leaf)]);
        let inner_id = inner.id();
        let outer = Group::new(vec![Arc::new(inner.into()), rect(200.0, 200.0, 50.0, 100.0)]);

        assert!(outer.hit_test(Point::new(50.0, 25.0), 0.0));
        assert!(outer.find_shape(inner_id).is_some());
        assert!(outer.find_shape(leaf.id()).is_some());
    }

    #[test]
    fn test_transform_does_not_touch_shared_children() {
        let child = rect(0.0, 0.0, 10.0, 10.0);
        let mut group = Group::new(vec![Arc::clone(&child)]);

        group.transform(Affine::translate((5.0, 0.0)));

        assert!((child.bounds().x0 - 0.0).abs() < f64::EPSILON);
        assert!((group.bounds().x0 - 5.0).abs() < f64::EPSILON);
    }
}
