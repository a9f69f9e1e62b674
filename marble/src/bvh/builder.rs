use glam::{vec3, Vec3};
use rand::Rng;

use super::{BvhNode, BvhNodeId, BvhNodes};
use crate::NodeInfo;

/// Builds the tree using random-axis median splits.
///
/// Each internal node picks a fresh random direction, sorts its objects by
/// their centroids projected onto it and splits them in half. This doesn't
/// produce trees as tight as SAH would, but it's cheap and never degenerates
/// on geometry clustered along a single axis.
///
/// Returns id of the root node, or `None` if there are no objects.
pub fn run<R>(
    nodes: &mut BvhNodes,
    node_infos: &mut [NodeInfo],
    rng: &mut R,
) -> Option<BvhNodeId>
where
    R: Rng + ?Sized,
{
    nodes.clear();

    if node_infos.is_empty() {
        return None;
    }

    nodes.reserve(2 * node_infos.len() - 1);

    Some(build(nodes, node_infos, rng))
}

fn build<R>(
    nodes: &mut BvhNodes,
    node_infos: &mut [NodeInfo],
    rng: &mut R,
) -> BvhNodeId
where
    R: Rng + ?Sized,
{
    match node_infos {
        [] => unreachable!(),

        [info] => nodes.add(leaf(info)),

        [left, right] => {
            let left_id = nodes.add(leaf(left));
            let right_id = nodes.add(leaf(right));

            internal(nodes, left_id, right_id)
        }

        _ => {
            let axis = random_axis(rng);

            node_infos.sort_by(|lhs, rhs| {
                lhs.centroid.dot(axis).total_cmp(&rhs.centroid.dot(axis))
            });

            let (left, right) = node_infos.split_at_mut(node_infos.len() / 2);
            let left_id = build(nodes, left, rng);
            let right_id = build(nodes, right, rng);

            internal(nodes, left_id, right_id)
        }
    }
}

fn leaf(info: &NodeInfo) -> BvhNode {
    BvhNode::Leaf {
        bounds: info.bounds,
        object: info.object,
        faces: info.faces,
    }
}

fn internal(
    nodes: &mut BvhNodes,
    left_id: BvhNodeId,
    right_id: BvhNodeId,
) -> BvhNodeId {
    let bounds = nodes[left_id].bounds() + nodes[right_id].bounds();

    nodes.add(BvhNode::Internal {
        bounds,
        left_id,
        right_id,
    })
}

/// Returns a random unit vector; components are drawn uniformly from
/// `-1.0 ..= 1.0` and then normalized.
fn random_axis<R>(rng: &mut R) -> Vec3
where
    R: Rng + ?Sized,
{
    loop {
        let axis = vec3(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );

        if let Some(axis) = axis.try_normalize() {
            return axis;
        }
    }
}
