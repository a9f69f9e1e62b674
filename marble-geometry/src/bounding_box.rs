use std::ops::{Add, AddAssign};

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// A freshly created box is *unset* (`min = +MAX`, `max = -MAX`) and becomes
/// valid after being grown by at least one point; from then on `min <= max`
/// holds on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn is_set(&self) -> bool {
        self.min.x <= self.max.x
    }

    /// Returns whether `p` lies inside this box, allowing for `epsilon` of
    /// slack on every side.
    pub fn contains_point(&self, p: Vec3, epsilon: f32) -> bool {
        self.is_set()
            && p.cmpge(self.min - epsilon).all()
            && p.cmple(self.max + epsilon).all()
    }

    /// Returns the point inside this box that's the closest to `p`.
    pub fn clamp_point(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::MAX, Vec3::MIN)
    }
}

impl Add<Vec3> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Vec3) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.min = self.min.min(rhs);
        self.max = self.max.max(rhs);
    }
}

impl FromIterator<Vec3> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

impl Add<Self> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Self> for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        // Growing by an unset box's corners would blow us up to infinity
        if rhs.is_set() {
            *self += rhs.min;
            *self += rhs.max;
        }
    }
}

impl FromIterator<Self> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Self>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn grows_over_points() {
        let bb: BoundingBox = [
            vec3(1.0, -2.0, 3.0),
            vec3(-1.0, 4.0, 0.5),
            vec3(0.0, 0.0, -7.0),
        ]
        .into_iter()
        .collect();

        assert!(bb.is_set());
        assert_eq!(vec3(-1.0, -2.0, -7.0), bb.min());
        assert_eq!(vec3(1.0, 4.0, 3.0), bb.max());
    }

    #[test]
    fn unset_box() {
        let bb = BoundingBox::default();

        assert!(!bb.is_set());
        assert!(!bb.contains_point(Vec3::ZERO, 1.0));
    }

    #[test]
    fn union_ignores_unset_operand() {
        let bb = BoundingBox::new(Vec3::ZERO, Vec3::ONE);

        assert_eq!(bb, bb + BoundingBox::default());
        assert_eq!(bb, BoundingBox::default() + bb);
    }

    #[test]
    fn union_of_two_boxes() {
        let a = BoundingBox::new(vec3(-1.0, 0.0, 0.0), vec3(0.0, 1.0, 1.0));
        let b = BoundingBox::new(vec3(2.0, -3.0, 0.5), vec3(3.0, 0.0, 0.75));
        let ab = a + b;

        assert_eq!(vec3(-1.0, -3.0, 0.0), ab.min());
        assert_eq!(vec3(3.0, 1.0, 1.0), ab.max());
    }

    #[test]
    fn contains_point_with_epsilon() {
        let bb = BoundingBox::new(Vec3::splat(-1.0), Vec3::splat(1.0));

        assert!(bb.contains_point(Vec3::ZERO, 0.0));
        assert!(bb.contains_point(vec3(1.0, -1.0, 1.0), 0.0));
        assert!(!bb.contains_point(vec3(1.001, 0.0, 0.0), 0.0));
        assert!(bb.contains_point(vec3(1.001, 0.0, 0.0), 0.01));
    }
}
