use glam::Vec3;

use super::{BvhNode, BvhNodeId, BvhNodes};
use crate::{Contact, ObjectId, Sphere, Triangle, TriangleId, Triangles};

pub fn run(
    nodes: &BvhNodes,
    triangles: &Triangles,
    root: Option<BvhNodeId>,
    ball: Sphere,
    velocity: Vec3,
    contacts: &mut Vec<Contact>,
    max_contacts: usize,
) -> bool {
    contacts.clear();

    // Also catches NaNs
    if !(ball.radius > 0.0) || !ball.center.is_finite() {
        return false;
    }

    let Some(root) = root else {
        return false;
    };

    let ctxt = Context {
        nodes,
        triangles,
        ball,
        velocity,
    };

    let found = ctxt.visit(root, contacts);

    // Traversal order depends on the tree's shape, triangle ids don't
    contacts.sort_unstable_by_key(|contact| contact.triangle_id);
    contacts.truncate(max_contacts);

    found
}

struct Context<'a> {
    nodes: &'a BvhNodes,
    triangles: &'a Triangles,
    ball: Sphere,
    velocity: Vec3,
}

impl Context<'_> {
    fn visit(&self, id: BvhNodeId, contacts: &mut Vec<Contact>) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };

        if !self.ball.overlaps_box(&node.bounds()) {
            return false;
        }

        match *node {
            BvhNode::Leaf { object, faces, .. } => {
                let mut found = false;

                for (triangle_id, triangle) in self.triangles.range(faces) {
                    if let Some(contact) =
                        self.touch(object, triangle_id, triangle)
                    {
                        contacts.push(contact);
                        found = true;
                    }
                }

                found
            }

            BvhNode::Internal {
                left_id, right_id, ..
            } => {
                let left = self.visit(left_id, contacts);
                let right = self.visit(right_id, contacts);

                left | right
            }
        }
    }

    fn touch(
        &self,
        object: ObjectId,
        triangle_id: TriangleId,
        triangle: &Triangle,
    ) -> Option<Contact> {
        // Zero-area triangles can't be touched
        let face_normal = triangle.normal()?;

        let (position, region) = triangle.closest_point(self.ball.center);
        let distance = self.ball.center.distance(position);

        if distance >= self.ball.radius {
            return None;
        }

        // Along an edge or at a vertex the face normal is ambiguous (the
        // neighbouring triangles have their own), so we push the ball away
        // from the feature instead; that direction is undefined only when the
        // ball's center lies exactly on it
        let normal = if region.is_face() {
            face_normal
        } else {
            (self.ball.center - position)
                .try_normalize()
                .unwrap_or(face_normal)
        };

        Some(Contact {
            position,
            normal,
            velocity: self.velocity,
            region,
            depth: self.ball.radius - distance,
            object,
            triangle_id,
        })
    }
}
