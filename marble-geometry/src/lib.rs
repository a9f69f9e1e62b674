//! Geometric primitives shared by the `marble` collision engine.
//!
//! Everything in here is a pure function of its inputs: boxes, rays, spheres
//! and triangles don't know about the tree they end up in.

mod bounding_box;
mod ray;
mod sphere;
mod triangle;

pub use glam;

pub use self::bounding_box::*;
pub use self::ray::*;
pub use self::sphere::*;
pub use self::triangle::*;
