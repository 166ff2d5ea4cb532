//! Depth-first edge walk
//!
//! Visits every edge of a finished tree in preorder, children in ascending
//! order of leading byte. Uses an explicit stack: tree depth can reach the
//! text length, so recursion is not an option.

use crate::tree::{Edge, Node, SuffixTree};

/// One edge visited by [`EdgeWalk`]
#[derive(Debug, Clone, Copy)]
pub struct WalkStep<'t> {
    pub edge: &'t Edge,
    /// String depth of the node the edge leaves
    pub depth: usize,
    /// Number of bytes on the edge
    pub length: usize,
}

impl WalkStep<'_> {
    /// String depth reached at the far end of the edge
    pub fn end_depth(&self) -> usize {
        self.depth + self.length
    }
}

/// Preorder iterator over all edges of a tree
pub struct EdgeWalk<'t> {
    tree: &'t SuffixTree,
    stack: Vec<WalkStep<'t>>,
}

impl<'t> EdgeWalk<'t> {
    pub fn new(tree: &'t SuffixTree) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
        };
        walk.descend(tree.root(), 0);
        walk
    }

    fn descend(&mut self, node: &'t Node, depth: usize) {
        let tree = self.tree;
        // Reversed so the smallest leading byte is popped first
        self.stack.extend(node.edges().rev().map(|(_, edge)| WalkStep {
            edge,
            depth,
            length: tree.label(edge).len(),
        }));
    }
}

impl<'t> Iterator for EdgeWalk<'t> {
    type Item = WalkStep<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.stack.pop()?;
        if let Some(child) = step.edge.end_node().and_then(|id| self.tree.node(id)) {
            self.descend(child, step.end_depth());
        }
        Some(step)
    }
}
