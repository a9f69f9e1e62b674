use glam::Vec3;

use crate::BoundingBox;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Returns whether this sphere touches or overlaps given box.
    pub fn overlaps_box(&self, bb: &BoundingBox) -> bool {
        if !bb.is_set() {
            return false;
        }

        let closest = bb.clamp_point(self.center);

        self.center.distance_squared(closest) <= self.radius * self.radius
    }
}
