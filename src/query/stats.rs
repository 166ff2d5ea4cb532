//! Tree statistics and edge listings

use super::search::longest_repeat;
use super::walk::EdgeWalk;
use crate::tree::{NodeId, Position, SuffixTree};
use serde::{Deserialize, Serialize};

/// Summary of a finished tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Text length, terminator included
    pub text_len: usize,
    /// Root plus internal nodes
    pub nodes: usize,
    pub internal_nodes: usize,
    pub leaves: usize,
    pub edges: usize,
    /// Suffixes without a leaf of their own
    pub implicit_suffixes: usize,
    /// Internal nodes carrying a suffix link
    pub suffix_links: usize,
    /// Length of the longest substring occurring at least twice
    pub longest_repeat: usize,
}

impl TreeStats {
    pub fn collect(tree: &SuffixTree) -> Self {
        Self {
            text_len: tree.len(),
            nodes: tree.node_count(),
            internal_nodes: tree.internal_count(),
            leaves: tree.leaf_count(),
            edges: tree.edge_count(),
            implicit_suffixes: tree.implicit_suffixes(),
            suffix_links: tree
                .nodes()
                .iter()
                .skip(1)
                .filter(|node| node.suffix_link().is_some())
                .count(),
            longest_repeat: longest_repeat(tree).len(),
        }
    }
}

/// One edge of the tree, for dumps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    /// `None` for leaf edges
    pub to: Option<NodeId>,
    pub start: Position,
    pub end: Position,
    /// String depth of `from`
    pub depth: usize,
    /// Edge label, lossily decoded
    pub label: String,
}

/// Every edge in depth-first, child-alphabetical order
pub fn edge_records(tree: &SuffixTree) -> Vec<EdgeRecord> {
    EdgeWalk::new(tree)
        .map(|step| {
            let (start, end) = tree.interval(step.edge);
            EdgeRecord {
                from: step.edge.start_node(),
                to: step.edge.end_node(),
                start,
                end,
                depth: step.depth,
                label: String::from_utf8_lossy(tree.label(step.edge)).into_owned(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TreeConfig, ROOT};

    #[test]
    fn test_stats_banana() {
        let tree = SuffixTree::with_config(b"banana", TreeConfig::terminated(b'$')).unwrap();
        let stats = TreeStats::collect(&tree);

        assert_eq!(
            stats,
            TreeStats {
                text_len: 7,
                nodes: 4,
                internal_nodes: 3,
                leaves: 7,
                edges: 10,
                implicit_suffixes: 0,
                suffix_links: 3,
                longest_repeat: 3,
            }
        );
    }

    #[test]
    fn test_stats_serialization() {
        let tree = SuffixTree::new(b"aa").unwrap();
        let stats = TreeStats::collect(&tree);

        let json = serde_json::to_string(&stats).unwrap();
        let parsed: TreeStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
        assert_eq!(parsed.implicit_suffixes, 1);
    }

    #[test]
    fn test_edge_records() {
        let tree = SuffixTree::new(b"a").unwrap();
        assert_eq!(
            edge_records(&tree),
            vec![EdgeRecord {
                from: ROOT,
                to: None,
                start: 0,
                end: 0,
                depth: 0,
                label: "a".to_string(),
            }]
        );
    }

    #[test]
    fn test_edge_records_internal() {
        let tree = SuffixTree::with_config(b"aa", TreeConfig::terminated(b'$')).unwrap();
        let records = edge_records(&tree);

        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["$", "a", "$", "a$"]);
        assert_eq!(records[1].to, Some(1));
        assert_eq!(records[2].from, 1);
        assert_eq!(records[3].depth, 1);
    }
}
