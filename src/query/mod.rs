//! Read-only traversals over a finished suffix tree
//!
//! - [`walk`] - Depth-first edge iterator (explicit stack, sorted children)
//! - [`suffixes`] - Suffix enumeration and the suffix length array
//! - [`bwt`] - Burrows-Wheeler transform derived from the suffix order
//! - [`search`] - Substring lookup, path labels, suffix-link checks
//! - [`stats`] - Tree statistics and edge dumps
//!
//! The query layer only ever sees a frozen [`SuffixTree`]; every leaf edge
//! already ends at `len - 1`.

pub mod bwt;
pub mod search;
pub mod stats;
pub mod suffixes;
pub mod walk;

pub use bwt::compute_bwt;
pub use search::{contains, longest_repeat, path_label, verify_suffix_links};
pub use stats::{EdgeRecord, TreeStats};
pub use suffixes::{enumerate_suffixes, suffix_length_array};
pub use walk::{EdgeWalk, WalkStep};

use crate::tree::{NodeId, SuffixTree, TreeResult};

/// Query handle borrowing a finished tree
#[derive(Clone, Copy)]
pub struct SuffixTreeQuery<'t> {
    tree: &'t SuffixTree,
}

impl<'t> SuffixTreeQuery<'t> {
    pub fn new(tree: &'t SuffixTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &'t SuffixTree {
        self.tree
    }

    pub fn walk(&self) -> EdgeWalk<'t> {
        EdgeWalk::new(self.tree)
    }

    /// All leaf suffixes in lexicographic order
    pub fn enumerate_suffixes(&self) -> Vec<Vec<u8>> {
        enumerate_suffixes(self.tree)
    }

    /// Suffix lengths in lexicographic order of the suffixes
    pub fn suffix_length_array(&self) -> Vec<usize> {
        suffix_length_array(self.tree)
    }

    pub fn compute_bwt(&self) -> Vec<u8> {
        compute_bwt(self.tree)
    }

    pub fn contains(&self, pattern: &[u8]) -> bool {
        contains(self.tree, pattern)
    }

    pub fn longest_repeat(&self) -> &'t [u8] {
        longest_repeat(self.tree)
    }

    pub fn path_label(&self, node: NodeId) -> Option<&'t [u8]> {
        path_label(self.tree, node)
    }

    pub fn verify_suffix_links(&self) -> TreeResult<()> {
        verify_suffix_links(self.tree)
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(self.tree)
    }

    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        stats::edge_records(self.tree)
    }
}
