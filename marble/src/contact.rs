use glam::Vec3;

use crate::{ObjectId, TriangleId, TriangleRegion};

/// Single ball vs triangle overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Point on the triangle that's the closest to the ball's center.
    pub position: Vec3,

    /// Face normal for contacts within the triangle, otherwise direction from
    /// `position` towards the ball's center.
    pub normal: Vec3,

    /// Ball's velocity, as passed into the query.
    pub velocity: Vec3,

    pub region: TriangleRegion,

    /// How deep the ball sinks into the triangle, i.e. `radius - distance`.
    pub depth: f32,

    pub object: ObjectId,
    pub triangle_id: TriangleId,
}
