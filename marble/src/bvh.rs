mod ball_query;
mod builder;
mod node;
mod nodes;
mod printer;
mod ray_query;
mod stats;


use std::fmt;

use derivative::Derivative;
use glam::{Affine3A, Vec3};
use rand::Rng;

pub use self::node::*;
pub use self::nodes::*;
pub use self::ray_query::RayHit;
pub use self::stats::*;
use crate::{
    metrics, BoundingBox, Contact, FacesRef, Mesh, NodeInfo, ObjectId, Ray,
    Sphere, Triangles,
};

/// Bounding volume hierarchy over level geometry.
///
/// Usage goes:
///
/// - [`Self::add_object()`] for each object of the level,
/// - [`Self::construct()`] with all of the returned [`NodeInfo`]s,
/// - [`Self::ray_test()`] / [`Self::ball_test()`], as many times as needed.
///
/// When geometry changes, call [`Self::clear()`] and start over (or use
/// [`Self::rebuild()`], which does all of that in one go).
#[derive(Clone, Default, Derivative)]
#[derivative(Debug)]
pub struct Bvh {
    #[derivative(Debug = "ignore")]
    triangles: Triangles,
    #[derivative(Debug = "ignore")]
    nodes: BvhNodes,
    root: Option<BvhNodeId>,
}

impl Bvh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transforms object's triangles into world-space, appends them into the
    /// triangle buffer and returns a summary of the object to be later passed
    /// into [`Self::construct()`].
    pub fn add_object(
        &mut self,
        object: ObjectId,
        mesh: &Mesh,
        transform: Affine3A,
    ) -> NodeInfo {
        let start = self.triangles.next_id();
        let mut bounds = BoundingBox::default();
        let mut vertex_sum = Vec3::ZERO;

        for triangle in mesh.triangles() {
            let triangle = triangle.with_transform(transform);

            bounds += triangle.bounds();
            vertex_sum += triangle.a + triangle.b + triangle.c;

            self.triangles.push(triangle);
        }

        let centroid = if mesh.is_empty() {
            Vec3::ZERO
        } else {
            vertex_sum / ((3 * mesh.len()) as f32)
        };

        log::trace!(
            "Object {} added; triangles = {}, bounds = {} .. {}",
            object,
            mesh.len(),
            bounds.min(),
            bounds.max(),
        );

        NodeInfo {
            object,
            faces: FacesRef::new(start, mesh.len() as u32),
            bounds,
            centroid,
        }
    }

    /// Builds the tree using the thread-local random number generator.
    ///
    /// See: [`Self::construct_with()`].
    pub fn construct(
        &mut self,
        node_infos: impl IntoIterator<Item = NodeInfo>,
    ) {
        self.construct_with(node_infos, &mut rand::thread_rng());
    }

    /// Builds the tree over objects previously added through
    /// [`Self::add_object()`], replacing the previous tree (if any).
    ///
    /// Triangles are left untouched - only the nodes get rebuilt.
    pub fn construct_with<R>(
        &mut self,
        node_infos: impl IntoIterator<Item = NodeInfo>,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        let mut node_infos: Vec<_> = node_infos.into_iter().collect();

        log::info!(
            "Building BVH; objects = {}, triangles = {}",
            node_infos.len(),
            self.triangles.len(),
        );

        for info in &node_infos {
            if info.faces.end().get() as usize > self.triangles.len() {
                log::warn!(
                    "Object {} refers to triangles {:?}, but there are only {} \
                     of them - was the BVH cleared after adding it?",
                    info.object,
                    info.faces.as_range(),
                    self.triangles.len(),
                );
            }
        }

        self.root = metrics::measure("BVH built", || {
            builder::run(&mut self.nodes, &mut node_infos, rng)
        });

        log::debug!("BVH ready; {}", self.stats());
    }

    /// Clears triangles and nodes, leaving an empty BVH behind.
    pub fn clear(&mut self) {
        log::debug!("Clearing BVH");

        self.triangles.clear();
        self.nodes.clear();
        self.root = None;
    }

    /// Clears the BVH, adds given objects and constructs the tree over them.
    pub fn rebuild<'a>(
        &mut self,
        objects: impl IntoIterator<Item = (ObjectId, &'a Mesh, Affine3A)>,
    ) {
        self.rebuild_with(objects, &mut rand::thread_rng());
    }

    /// Same as [`Self::rebuild()`], but with an explicit random number
    /// generator.
    pub fn rebuild_with<'a, R>(
        &mut self,
        objects: impl IntoIterator<Item = (ObjectId, &'a Mesh, Affine3A)>,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        self.clear();

        let node_infos: Vec<_> = objects
            .into_iter()
            .map(|(object, mesh, transform)| {
                self.add_object(object, mesh, transform)
            })
            .collect();

        self.construct_with(node_infos, rng);
    }

    /// Returns the nearest hit along given ray.
    ///
    /// `direction` doesn't have to be normalized - the returned distance is
    /// expressed in its multiples (`point = origin + distance * direction`).
    ///
    /// When a couple of triangles are hit at exactly the same distance, the
    /// one added earlier (i.e. with the smaller [`crate::TriangleId`]) wins;
    /// this doesn't depend on how the tree happened to get built.
    pub fn ray_test(&self, origin: Vec3, direction: Vec3) -> Option<RayHit> {
        ray_query::run(
            &self.nodes,
            &self.triangles,
            self.root,
            Ray::new(origin, direction),
        )
    }

    /// Collects triangles penetrated by a ball of given radius.
    ///
    /// `contacts` is cleared and then filled with up to `max_contacts`
    /// contacts, ordered by triangle id; surplus contacts are dropped. Returns
    /// whether the ball touches anything at all, which can be `true` even if
    /// nothing fit within `max_contacts`.
    pub fn ball_test(
        &self,
        center: Vec3,
        radius: f32,
        velocity: Vec3,
        contacts: &mut Vec<Contact>,
        max_contacts: usize,
    ) -> bool {
        ball_query::run(
            &self.nodes,
            &self.triangles,
            self.root,
            Sphere::new(center, radius),
            velocity,
            contacts,
            max_contacts,
        )
    }

    pub fn triangles(&self) -> &Triangles {
        &self.triangles
    }

    pub fn nodes(&self) -> &BvhNodes {
        &self.nodes
    }

    pub fn root(&self) -> Option<BvhNodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns bounds of the entire tree (unset if it's empty).
    pub fn bounds(&self) -> BoundingBox {
        self.root
            .map(|root| self.nodes[root].bounds())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> BvhStats {
        BvhStats::collect(&self.nodes, self.root, self.triangles.len())
    }
}

impl fmt::Display for Bvh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        printer::print(f, &self.nodes, self.root)
    }
}
