//! The finished, read-only suffix tree

use super::builder::SuffixTreeBuilder;
use super::error::TreeResult;
use super::types::*;
use crate::query::SuffixTreeQuery;

/// A frozen suffix tree over an immutable text
///
/// Every edge interval is fixed (`EdgeEnd::Fixed`) and at most `len - 1`.
/// Build one with [`SuffixTree::new`], [`SuffixTree::with_config`] or a
/// [`SuffixTreeBuilder`].
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// Source text, including the terminator if one was configured
    text: Vec<u8>,
    /// Node arena, root at [`ROOT`]
    nodes: Vec<Node>,
    config: TreeConfig,
    /// Suffixes left implicit at the end of construction
    implicit_suffixes: usize,
}

impl SuffixTree {
    /// Build a tree over `text` with no terminator
    pub fn new(text: &[u8]) -> TreeResult<Self> {
        SuffixTreeBuilder::with_defaults().build(text)
    }

    /// Build a tree over `text` with the given configuration
    pub fn with_config(text: &[u8], config: TreeConfig) -> TreeResult<Self> {
        SuffixTreeBuilder::new(config).build(text)
    }

    pub(crate) fn from_parts(
        text: Vec<u8>,
        nodes: Vec<Node>,
        config: TreeConfig,
        implicit_suffixes: usize,
    ) -> Self {
        Self {
            text,
            nodes,
            config,
            implicit_suffixes,
        }
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes, indexed by [`NodeId`]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Root plus internal nodes (leaves are not materialized)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::edge_count).sum()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|node| node.edges())
            .filter(|(_, edge)| edge.is_leaf())
            .count()
    }

    /// Number of suffixes represented only as a prefix of a longer path.
    ///
    /// Always zero when the last byte is unique in the text (for example
    /// when a terminator is configured).
    pub fn implicit_suffixes(&self) -> usize {
        self.implicit_suffixes
    }

    /// Inclusive `(start, end)` of an edge label
    pub fn interval(&self, edge: &Edge) -> (Position, Position) {
        let last = self.text.len().saturating_sub(1);
        (edge.start(), edge.end(last))
    }

    /// Bytes spelled by an edge
    pub fn label(&self, edge: &Edge) -> &[u8] {
        let (start, end) = self.interval(edge);
        &self.text[start..=end]
    }

    /// Read-only traversals over this tree
    pub fn query(&self) -> SuffixTreeQuery<'_> {
        SuffixTreeQuery::new(self)
    }
}
