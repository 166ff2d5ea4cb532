//! Burrows-Wheeler transform from the suffix ordering
//!
//! For each suffix in lexicographic order, emit the byte right before it.
//! The full-length suffix has no predecessor; it wraps around to the last
//! byte of the text, which is the terminator when one is configured.

use super::suffixes::suffix_length_array;
use crate::tree::SuffixTree;

/// BWT of the tree's text
///
/// Has `len` bytes whenever no suffix is implicit, which a terminator
/// guarantees.
pub fn compute_bwt(tree: &SuffixTree) -> Vec<u8> {
    let text = tree.text();
    let n = text.len();

    suffix_length_array(tree)
        .into_iter()
        .map(|len| {
            if len >= n {
                text[n - 1]
            } else {
                text[n - len - 1]
            }
        })
        .collect()
}
