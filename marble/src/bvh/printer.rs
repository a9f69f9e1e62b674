use std::fmt;

use super::{BvhNode, BvhNodeId, BvhNodes};

/// Pretty-prints the tree, one node per line:
///
/// ```text
/// node [-1, -1, -1] .. [4, 1, 1]
/// | leaf #1 (12 triangles): [-1, -1, -1] .. [1, 1, 1]
/// | node [2, -1, -1] .. [4, 1, 1]
/// | | leaf #2 (2 triangles): [2, -1, -1] .. [3, 1, 1]
/// | | leaf #3 (2 triangles): [3, -1, -1] .. [4, 1, 1]
/// ```
pub fn print(
    f: &mut fmt::Formatter<'_>,
    nodes: &BvhNodes,
    root: Option<BvhNodeId>,
) -> fmt::Result {
    match root {
        Some(root) => process(f, nodes, root, 0),
        None => writeln!(f, "(empty)"),
    }
}

fn process(
    f: &mut fmt::Formatter<'_>,
    nodes: &BvhNodes,
    id: BvhNodeId,
    depth: usize,
) -> fmt::Result {
    let Some(node) = nodes.get(id) else {
        return Ok(());
    };

    for _ in 0..depth {
        write!(f, "| ")?;
    }

    let bounds = node.bounds();

    match *node {
        BvhNode::Internal {
            left_id, right_id, ..
        } => {
            writeln!(f, "node {} .. {}", bounds.min(), bounds.max())?;

            process(f, nodes, left_id, depth + 1)?;
            process(f, nodes, right_id, depth + 1)?;
        }

        BvhNode::Leaf { object, faces, .. } => {
            writeln!(
                f,
                "leaf {} ({} triangles): {} .. {}",
                object,
                faces.count(),
                bounds.min(),
                bounds.max()
            )?;
        }
    }

    Ok(())
}
