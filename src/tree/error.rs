//! Errors raised while building or verifying a suffix tree
//!
//! Everything except [`SuffixTreeError::InvalidInput`] is a broken
//! construction invariant. Those abort the build; no partial tree is ever
//! returned.

use super::types::{NodeId, Position};

/// Result type for tree operations
pub type TreeResult<T> = Result<T, SuffixTreeError>;

/// Errors that can occur while building a suffix tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixTreeError {
    /// Input byte collides with the configured terminator
    InvalidInput { offset: Position, byte: u8 },
    /// An edge interval ended up with `start > end`
    MalformedEdgeInterval {
        phase: Position,
        start: Position,
        end: Position,
    },
    /// A node that must carry a suffix link has none
    DanglingSuffixLink { phase: Position, node: NodeId },
    /// The active point names an edge that does not exist or runs off a leaf
    ActivePointOverrun { phase: Position, node: NodeId },
    /// A suffix link does not point at the node for the label minus its first byte
    SuffixLinkMismatch { node: NodeId, target: NodeId },
}

impl SuffixTreeError {
    /// Phase index at which construction failed, if this is a construction error
    pub fn phase(&self) -> Option<Position> {
        match self {
            SuffixTreeError::InvalidInput { offset, .. } => Some(*offset),
            SuffixTreeError::MalformedEdgeInterval { phase, .. }
            | SuffixTreeError::DanglingSuffixLink { phase, .. }
            | SuffixTreeError::ActivePointOverrun { phase, .. } => Some(*phase),
            SuffixTreeError::SuffixLinkMismatch { .. } => None,
        }
    }
}

impl std::fmt::Display for SuffixTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuffixTreeError::InvalidInput { offset, byte } => write!(
                f,
                "Invalid input: byte 0x{:02x} at offset {} is the terminator",
                byte, offset
            ),
            SuffixTreeError::MalformedEdgeInterval { phase, start, end } => write!(
                f,
                "Malformed edge interval [{}, {}] in phase {}",
                start, end, phase
            ),
            SuffixTreeError::DanglingSuffixLink { phase, node } => {
                write!(f, "Node {} has no suffix link in phase {}", node, phase)
            }
            SuffixTreeError::ActivePointOverrun { phase, node } => write!(
                f,
                "Active point left the tree below node {} in phase {}",
                node, phase
            ),
            SuffixTreeError::SuffixLinkMismatch { node, target } => write!(
                f,
                "Suffix link {} -> {} does not drop exactly one leading byte",
                node, target
            ),
        }
    }
}

impl std::error::Error for SuffixTreeError {}
