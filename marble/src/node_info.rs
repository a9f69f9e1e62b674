use glam::Vec3;

use crate::{BoundingBox, FacesRef, ObjectId};

/// Summary of a single object, consumed when building the tree.
///
/// Created through [`Bvh::add_object()`], which also pushes the object's
/// triangles into the BVH's triangle buffer.
///
/// [`Bvh::add_object()`]: crate::Bvh::add_object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeInfo {
    pub object: ObjectId,
    pub faces: FacesRef,
    pub bounds: BoundingBox,

    /// Mean of all of the object's vertices; used only to decide on which
    /// side of a split the object lands.
    pub centroid: Vec3,
}
