//! Types for suffix tree construction
//!
//! Nodes live in an arena (`Vec<Node>`) and are addressed by [`NodeId`].
//! Each node owns its outgoing edges, keyed by the first byte of the edge
//! label. Suffix links are plain arena indices, so the only ownership tree
//! is root -> edges -> child nodes.

use super::error::{SuffixTreeError, TreeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index into the node arena
pub type NodeId = usize;

/// Index into the source text
pub type Position = usize;

/// Arena slot of the root node
pub const ROOT: NodeId = 0;

/// End of an edge interval
///
/// Leaf edges stay `Open` during construction and all read the builder's
/// shared leaf end, so bumping that one counter extends every leaf at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Tracks the current phase (leaf edge under construction)
    Open,
    /// Frozen, inclusive end position
    Fixed(Position),
}

/// A labeled edge `text[start..=end]` leaving `start_node`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    start: Position,
    end: EdgeEnd,
    start_node: NodeId,
    /// `None` for leaf edges
    end_node: Option<NodeId>,
}

impl Edge {
    /// New open leaf edge starting at `start`
    pub(crate) fn leaf(start: Position, from: NodeId) -> Self {
        Self {
            start,
            end: EdgeEnd::Open,
            start_node: from,
            end_node: None,
        }
    }

    /// First text position of the label
    pub fn start(&self) -> Position {
        self.start
    }

    /// Inclusive end position, resolving open ends against `leaf_end`
    pub fn end(&self, leaf_end: Position) -> Position {
        match self.end {
            EdgeEnd::Open => leaf_end,
            EdgeEnd::Fixed(end) => end,
        }
    }

    /// Number of bytes on the edge label
    pub fn length(&self, leaf_end: Position) -> usize {
        (self.end(leaf_end) + 1).saturating_sub(self.start)
    }

    pub fn is_open(&self) -> bool {
        self.end == EdgeEnd::Open
    }

    /// Leaf edges have no end node
    pub fn is_leaf(&self) -> bool {
        self.end_node.is_none()
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> Option<NodeId> {
        self.end_node
    }

    /// Split this edge so that it ends right before `position`.
    ///
    /// The shortened edge now arrives at `mid`; the returned edge carries the
    /// remainder `text[position..=end]` out of `mid`, inheriting the original
    /// end (open or fixed) and end node. `leaf_end` doubles as the phase index
    /// for error reporting.
    pub(crate) fn split_at(
        &mut self,
        position: Position,
        mid: NodeId,
        leaf_end: Position,
    ) -> TreeResult<Edge> {
        let end = self.end(leaf_end);
        if position <= self.start || position > end {
            return Err(SuffixTreeError::MalformedEdgeInterval {
                phase: leaf_end,
                start: position,
                end,
            });
        }

        let remainder = Edge {
            start: position,
            end: self.end,
            start_node: mid,
            end_node: self.end_node,
        };

        self.end = EdgeEnd::Fixed(position - 1);
        self.end_node = Some(mid);

        Ok(remainder)
    }

    /// Freeze the end of a previously open edge
    pub(crate) fn set_explicit_end(&mut self, position: Position) {
        self.end = EdgeEnd::Fixed(position);
    }
}

/// A branching point of the tree
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    children: BTreeMap<u8, Edge>,
    suffix_link: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            children: BTreeMap::new(),
            suffix_link: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Outgoing edge whose label starts with `symbol`
    pub fn edge_for(&self, symbol: u8) -> Option<&Edge> {
        self.children.get(&symbol)
    }

    pub(crate) fn edge_for_mut(&mut self, symbol: u8) -> Option<&mut Edge> {
        self.children.get_mut(&symbol)
    }

    /// Insert or overwrite the edge for `symbol`.
    ///
    /// `symbol` must equal `text[edge.start()]`.
    pub(crate) fn add_edge(&mut self, symbol: u8, edge: Edge) {
        self.children.insert(symbol, edge);
    }

    pub(crate) fn set_suffix_link(&mut self, target: NodeId) {
        self.suffix_link = Some(target);
    }

    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// Outgoing edges in ascending order of leading byte
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = (u8, &Edge)> {
        self.children.iter().map(|(&symbol, edge)| (symbol, edge))
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> {
        self.children.values_mut()
    }

    pub fn edge_count(&self) -> usize {
        self.children.len()
    }
}

/// Configuration for suffix tree building
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Unique byte appended as the final phase (default: none)
    ///
    /// Without a terminator, suffixes that also occur earlier in the text
    /// stay implicit and get no leaf of their own.
    #[serde(default)]
    pub terminator: Option<u8>,
    /// ASCII-lowercase every input byte (default: false)
    #[serde(default)]
    pub case_insensitive: bool,
}

impl TreeConfig {
    /// Config that appends `terminator` to the text
    pub fn terminated(terminator: u8) -> Self {
        Self {
            terminator: Some(terminator),
            ..Default::default()
        }
    }

    /// Byte as it enters the tree
    #[inline]
    pub(crate) fn fold(&self, byte: u8) -> u8 {
        if self.case_insensitive {
            byte.to_ascii_lowercase()
        } else {
            byte
        }
    }
}
