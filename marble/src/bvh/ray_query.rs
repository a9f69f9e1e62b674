use glam::Vec3;

use super::{BvhNode, BvhNodeId, BvhNodes};
use crate::{ObjectId, Ray, TriangleId, Triangles};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance to the hit, in multiples of the ray's direction.
    pub distance: f32,
    pub point: Vec3,
    pub object: ObjectId,
    pub triangle_id: TriangleId,
}

impl RayHit {
    /// Returns whether this hit should win over `other`.
    ///
    /// Exact ties are broken by triangle id, so that the winner doesn't
    /// depend on the shape of the tree.
    fn is_closer_than(&self, other: &Self) -> bool {
        (self.distance, self.triangle_id) < (other.distance, other.triangle_id)
    }
}

pub fn run(
    nodes: &BvhNodes,
    triangles: &Triangles,
    root: Option<BvhNodeId>,
    ray: Ray,
) -> Option<RayHit> {
    if ray.is_degenerate() {
        return None;
    }

    visit(nodes, triangles, root?, ray)
}

fn visit(
    nodes: &BvhNodes,
    triangles: &Triangles,
    id: BvhNodeId,
    ray: Ray,
) -> Option<RayHit> {
    let node = nodes.get(id)?;

    ray.hits_box(&node.bounds())?;

    match *node {
        BvhNode::Leaf { object, faces, .. } => {
            let mut best: Option<RayHit> = None;

            for (triangle_id, triangle) in triangles.range(faces) {
                let Some(distance) = triangle.hit(&ray) else {
                    continue;
                };

                let hit = RayHit {
                    distance,
                    point: ray.at(distance),
                    object,
                    triangle_id,
                };

                if best.map_or(true, |best| hit.is_closer_than(&best)) {
                    best = Some(hit);
                }
            }

            best
        }

        // Both children get visited, even if the left one has been already
        // hit closer than where the right one begins
        BvhNode::Internal {
            left_id, right_id, ..
        } => {
            let left = visit(nodes, triangles, left_id, ray);
            let right = visit(nodes, triangles, right_id, ray);

            match (left, right) {
                (Some(left), Some(right)) => {
                    if right.is_closer_than(&left) {
                        Some(right)
                    } else {
                        Some(left)
                    }
                }
                (left, right) => left.or(right),
            }
        }
    }
}
