use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict overlap test. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// The playing field. Origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp the top edge of something `extent` tall into `[0, height - extent]`.
    /// An extent taller than the field pins to 0.
    pub fn clamp_y(&self, y: f32, extent: f32) -> f32 {
        y.min(self.height - extent).max(0.0)
    }

    /// Top-left position that puts a box of `size` at the field center
    pub fn centered(&self, size: Vec2) -> Vec2 {
        self.center() - size * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersects_overlapping() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_intersect() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b), "Shared edge is not an overlap");
    }

    #[test]
    fn test_aabb_edges_and_center() {
        let a = Aabb::from_pos_size(Vec2::new(392.5, 242.5), Vec2::new(15.0, 15.0));
        assert_eq!(a.left(), 392.5);
        assert_eq!(a.right(), 407.5);
        assert_eq!(a.top(), 242.5);
        assert_eq!(a.bottom(), 257.5);
        assert_eq!(a.center(), Vec2::new(400.0, 250.0));
        assert!(a.contains(Vec2::new(400.0, 250.0)));
    }

    #[test]
    fn test_field_clamp_y() {
        let field = Field::new(800.0, 500.0);
        assert_eq!(field.clamp_y(-20.0, 100.0), 0.0);
        assert_eq!(field.clamp_y(450.0, 100.0), 400.0);
        assert_eq!(field.clamp_y(123.0, 100.0), 123.0);
    }

    #[test]
    fn test_field_clamp_y_oversized_extent() {
        let field = Field::new(800.0, 50.0);
        assert_eq!(field.clamp_y(10.0, 100.0), 0.0);
    }

    #[test]
    fn test_field_centered() {
        let field = Field::new(800.0, 500.0);
        let pos = field.centered(Vec2::splat(15.0));
        assert_eq!(pos, Vec2::new(392.5, 242.5));
    }
}
