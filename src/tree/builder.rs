//! Online suffix tree builder (Ukkonen's algorithm)
//!
//! Each input byte is one phase. A phase first bumps the shared leaf end,
//! which extends every open leaf edge at once, then runs extensions from
//! the active point until either all pending suffixes are inserted or an
//! extension finds its suffix already present:
//!
//! 1. Rule 2 at a node: hang a new leaf edge off the active node
//! 2. Rule 2 mid-edge: split the edge, add an internal node and a leaf
//! 3. Rule 3: the suffix is already in the tree; stop the phase
//!
//! After each rule 2 extension the active point moves to the next shorter
//! suffix via the active node's suffix link (or by dropping one byte at the
//! root) and is re-anchored by skip/count: whole edges are hopped by length
//! without comparing their bytes. This keeps total work linear.

use super::error::{SuffixTreeError, TreeResult};
use super::suffix_tree::SuffixTree;
use super::types::*;

/// Builder for constructing a suffix tree one byte at a time
pub struct SuffixTreeBuilder {
    config: TreeConfig,
    /// Text consumed so far (case-folded if configured)
    text: Vec<u8>,
    /// Node arena, root at index 0
    nodes: Vec<Node>,
    active_node: NodeId,
    /// Text position of the leading byte of the active edge
    active_edge: Position,
    active_length: usize,
    /// Suffixes of the current prefix not yet inserted explicitly
    remaining: usize,
    /// Internal node created earlier in this phase, still waiting for its suffix link
    last_internal: Option<NodeId>,
    /// Shared end of every open leaf edge (the current phase)
    leaf_end: Position,
}

impl SuffixTreeBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: TreeConfig) -> Self {
        let mut root = Node::new(ROOT);
        root.set_suffix_link(ROOT);

        Self {
            config,
            text: Vec::new(),
            nodes: vec![root],
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            remaining: 0,
            last_internal: None,
            leaf_end: 0,
        }
    }

    /// Create a builder with default configuration (no terminator)
    pub fn with_defaults() -> Self {
        Self::new(TreeConfig::default())
    }

    /// Number of bytes consumed so far
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume one byte (one phase)
    pub fn push(&mut self, byte: u8) -> TreeResult<()> {
        let byte = self.config.fold(byte);
        if self.config.terminator == Some(byte) {
            return Err(SuffixTreeError::InvalidInput {
                offset: self.text.len(),
                byte,
            });
        }
        self.phase(byte)
    }

    /// Consume a chunk of bytes
    ///
    /// The chunk is checked for terminator collisions up front, so an
    /// `InvalidInput` error leaves the builder untouched.
    pub fn extend(&mut self, bytes: &[u8]) -> TreeResult<()> {
        if let Some(offset) = self.find_terminator(bytes) {
            return Err(SuffixTreeError::InvalidInput {
                offset: self.text.len() + offset,
                byte: bytes[offset],
            });
        }

        self.text.reserve(bytes.len());
        for &byte in bytes {
            let byte = self.config.fold(byte);
            self.phase(byte)?;
        }
        Ok(())
    }

    /// One-shot construction: consume `text` and freeze the tree
    pub fn build(mut self, text: &[u8]) -> TreeResult<SuffixTree> {
        self.extend(text)?;
        self.finish()
    }

    /// Append the terminator (if configured), freeze all open leaf edges
    /// and hand out the finished tree
    pub fn finish(mut self) -> TreeResult<SuffixTree> {
        if let Some(terminator) = self.config.terminator {
            self.phase(terminator)?;
        }

        if let Some(last) = self.text.len().checked_sub(1) {
            for node in &mut self.nodes {
                for edge in node.edges_mut() {
                    if edge.is_open() {
                        edge.set_explicit_end(last);
                    }
                }
            }
        }

        self.check_frozen()?;

        Ok(SuffixTree::from_parts(
            self.text,
            self.nodes,
            self.config,
            self.remaining,
        ))
    }

    /// First offset in `bytes` that would fold to the terminator
    fn find_terminator(&self, bytes: &[u8]) -> Option<usize> {
        let terminator = self.config.terminator?;

        if !self.config.case_insensitive {
            memchr::memchr(terminator, bytes)
        } else if terminator.is_ascii_lowercase() {
            memchr::memchr2(terminator, terminator.to_ascii_uppercase(), bytes)
        } else if terminator.is_ascii_uppercase() {
            // Folding never produces an uppercase byte
            None
        } else {
            memchr::memchr(terminator, bytes)
        }
    }

    /// Phase `i`: add `byte` at position `i` and insert every pending suffix
    fn phase(&mut self, byte: u8) -> TreeResult<()> {
        let i = self.text.len();
        self.text.push(byte);
        self.leaf_end = i;
        self.remaining += 1;
        self.last_internal = None;

        while self.remaining > 0 {
            if self.active_length == 0 {
                self.active_edge = i;
            }
            self.walk_down(i)?;

            let node = self.active_node;
            let lead = self.text[self.active_edge];

            // walk_down guarantees the edge exists whenever active_length > 0
            let Some(edge) = self.nodes[node].edge_for(lead) else {
                // Rule 2: new leaf straight off the active node
                self.nodes[node].add_edge(byte, Edge::leaf(i, node));
                self.link_pending(node);
                self.next_extension(i)?;
                continue;
            };

            let probe = edge.start() + self.active_length;
            let edge_len = edge.length(self.leaf_end);
            let end_node = edge.end_node();

            if self.text[probe] == byte {
                // Rule 3: already present, and so is every shorter suffix
                self.link_pending(node);
                self.active_length += 1;
                if self.active_length == edge_len {
                    if let Some(next) = end_node {
                        self.active_node = next;
                        self.active_length = 0;
                    }
                }
                break;
            }

            // Rule 2: split at the mismatch
            let split = self.split_edge(lead, probe, byte, i)?;
            self.link_pending(split);
            self.last_internal = Some(split);
            self.next_extension(i)?;
        }

        Ok(())
    }

    /// Skip/count: hop whole edges while the active length covers them
    fn walk_down(&mut self, phase: Position) -> TreeResult<()> {
        while self.active_length > 0 {
            let node = self.active_node;
            let lead = self.text[self.active_edge];
            let edge = self.nodes[node]
                .edge_for(lead)
                .ok_or(SuffixTreeError::ActivePointOverrun { phase, node })?;

            let edge_len = edge.length(self.leaf_end);
            if self.active_length < edge_len {
                break;
            }

            let next = edge
                .end_node()
                .ok_or(SuffixTreeError::ActivePointOverrun { phase, node })?;
            self.active_node = next;
            self.active_edge += edge_len;
            self.active_length -= edge_len;
        }
        Ok(())
    }

    /// Split the active edge before `probe` and attach a leaf for `byte`.
    /// Returns the new internal node.
    fn split_edge(
        &mut self,
        lead: u8,
        probe: Position,
        byte: u8,
        phase: Position,
    ) -> TreeResult<NodeId> {
        let mid = self.nodes.len();
        let parent = self.active_node;
        let leaf_end = self.leaf_end;

        let edge = self.nodes[parent]
            .edge_for_mut(lead)
            .ok_or(SuffixTreeError::ActivePointOverrun {
                phase,
                node: parent,
            })?;
        let remainder = edge.split_at(probe, mid, leaf_end)?;

        let mut node = Node::new(mid);
        node.add_edge(self.text[probe], remainder);
        node.add_edge(byte, Edge::leaf(phase, mid));
        self.nodes.push(node);

        Ok(mid)
    }

    /// Point the pending internal node (if any) at `target`
    fn link_pending(&mut self, target: NodeId) {
        if let Some(pending) = self.last_internal.take() {
            self.nodes[pending].set_suffix_link(target);
        }
    }

    /// Book one inserted suffix and move the active point to the next shorter one
    fn next_extension(&mut self, phase: Position) -> TreeResult<()> {
        self.remaining -= 1;

        if self.active_node == ROOT {
            if self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = phase + 1 - self.remaining;
            }
        } else {
            let node = self.active_node;
            self.active_node = self.nodes[node]
                .suffix_link()
                .ok_or(SuffixTreeError::DanglingSuffixLink { phase, node })?;
        }

        Ok(())
    }

    /// Every node linked, every edge frozen and well-formed
    fn check_frozen(&self) -> TreeResult<()> {
        let phase = self.text.len().saturating_sub(1);

        for node in &self.nodes {
            if node.suffix_link().is_none() {
                return Err(SuffixTreeError::DanglingSuffixLink {
                    phase,
                    node: node.id(),
                });
            }
            for (_, edge) in node.edges() {
                let end = edge.end(phase);
                if edge.is_open() || edge.start() > end {
                    return Err(SuffixTreeError::MalformedEdgeInterval {
                        phase,
                        start: edge.start(),
                        end,
                    });
                }
            }
        }

        Ok(())
    }
}
