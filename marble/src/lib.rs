//! Bounding volume hierarchy over the triangles of a level, answering the two
//! questions gameplay keeps asking every frame:
//!
//! - what's the first surface a ray hits (picking, camera occlusion),
//! - which surfaces does a ball currently touch (ball vs level contacts).
//!
//! The tree is built once per geometry snapshot and then queried read-only;
//! when the geometry changes, it's rebuilt from scratch.

mod bvh;
mod contact;
mod error;
mod mesh;
mod metrics;
mod node_info;
mod object_id;
mod triangles;

pub use marble_geometry::*;

pub use self::bvh::*;
pub use self::contact::*;
pub use self::error::*;
pub use self::mesh::*;
pub use self::node_info::*;
pub use self::object_id::*;
pub use self::triangles::*;
