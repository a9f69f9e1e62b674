use std::fmt;

use super::{BvhNode, BvhNodeId, BvhNodes};

/// Shape of a built tree; handy for logs and for eyeballing how well the
/// geometry got partitioned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BvhStats {
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
    pub triangles: usize,
}

impl BvhStats {
    pub(super) fn collect(
        nodes: &BvhNodes,
        root: Option<BvhNodeId>,
        triangles: usize,
    ) -> Self {
        let mut this = Self {
            triangles,
            ..Default::default()
        };

        if let Some(root) = root {
            this.visit(nodes, root, 1);
        }

        this
    }

    fn visit(&mut self, nodes: &BvhNodes, id: BvhNodeId, depth: usize) {
        let Some(node) = nodes.get(id) else {
            return;
        };

        self.nodes += 1;
        self.depth = self.depth.max(depth);

        match *node {
            BvhNode::Leaf { .. } => {
                self.leaves += 1;
            }

            BvhNode::Internal {
                left_id, right_id, ..
            } => {
                self.visit(nodes, left_id, depth + 1);
                self.visit(nodes, right_id, depth + 1);
            }
        }
    }
}

impl fmt::Display for BvhStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes = {}, leaves = {}, depth = {}, triangles = {}",
            self.nodes, self.leaves, self.depth, self.triangles
        )
    }
}
