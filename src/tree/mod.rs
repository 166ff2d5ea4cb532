//! Suffix tree construction module
//!
//! Builds a compressed trie of every suffix of a byte string in amortized
//! linear time using Ukkonen's online algorithm.
//!
//! ## Architecture
//!
//! - `types`: Nodes, edges, ids and build configuration
//! - `builder`: The online construction engine (phases, extensions, active point)
//! - `suffix_tree`: The frozen tree handed to the query layer
//! - `error`: Construction and verification errors
//!
//! ## Memory Layout
//!
//! Nodes sit in an arena indexed by [`NodeId`]. Each node owns its outgoing
//! edges in a byte-keyed ordered map; leaves are not materialized as nodes.
//! Suffix links are arena indices, never owning references.

pub mod builder;
pub mod error;
pub mod suffix_tree;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use error::{SuffixTreeError, TreeResult};
pub use suffix_tree::SuffixTree;
pub use types::{Edge, EdgeEnd, Node, NodeId, Position, TreeConfig, ROOT};
