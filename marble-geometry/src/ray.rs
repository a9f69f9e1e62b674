use glam::Vec3;

use crate::BoundingBox;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    inv_direction: Vec3,
}

impl Ray {
    /// Creates a new ray.
    ///
    /// `direction` doesn't have to be normalized - all distances reported for
    /// this ray are expressed in multiples of `direction`, i.e. the point at
    /// distance `t` is `origin + t * direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: 1.0 / direction,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Returns whether this ray can't hit anything (zero or non-finite
    /// direction, or a non-finite origin).
    pub fn is_degenerate(&self) -> bool {
        !self.origin.is_finite()
            || !self.direction.is_finite()
            || self.direction.length_squared() == 0.0
    }

    /// Slab test; returns distance at which this ray enters given box (zero
    /// if the origin is already inside of it) or `None` if the box is missed.
    pub fn hits_box(&self, bb: &BoundingBox) -> Option<f32> {
        if !bb.is_set() || self.is_degenerate() {
            return None;
        }

        let mut t_enter = 0.0f32;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let min = bb.min()[axis];
            let max = bb.max()[axis];

            // Parallel to this slab - `inv_direction` is infinite here, so
            // instead of multiplying by it (and risking `0 * inf = NaN`) we
            // just check whether we're in between the planes
            if self.direction[axis] == 0.0 {
                if origin < min || origin > max {
                    return None;
                }

                continue;
            }

            let t0 = (min - origin) * self.inv_direction[axis];
            let t1 = (max - origin) * self.inv_direction[axis];

            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));

            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}
