//! Pattern lookup, path labels and suffix-link verification

use super::walk::EdgeWalk;
use crate::tree::{NodeId, Position, ROOT, SuffixTree, SuffixTreeError, TreeResult};

/// Where a node's path label sits in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpan {
    /// Start of one occurrence of the path label
    pub start: Position,
    /// String depth (label length)
    pub depth: usize,
}

/// Path label location of every node reachable from the root, indexed by id
pub fn node_spans(tree: &SuffixTree) -> Vec<Option<NodeSpan>> {
    let mut spans = vec![None; tree.node_count()];
    spans[ROOT] = Some(NodeSpan { start: 0, depth: 0 });

    for step in EdgeWalk::new(tree) {
        if let Some(child) = step.edge.end_node() {
            let (_, end) = tree.interval(step.edge);
            let depth = step.end_depth();
            spans[child] = Some(NodeSpan {
                start: end + 1 - depth,
                depth,
            });
        }
    }

    spans
}

fn span_label(tree: &SuffixTree, span: NodeSpan) -> &[u8] {
    &tree.text()[span.start..span.start + span.depth]
}

/// Concatenated edge labels from the root to `node`
pub fn path_label(tree: &SuffixTree, node: NodeId) -> Option<&[u8]> {
    let span = node_spans(tree).get(node).copied().flatten()?;
    Some(span_label(tree, span))
}

/// Does `pattern` occur anywhere in the text?
pub fn contains(tree: &SuffixTree, pattern: &[u8]) -> bool {
    let mut node = tree.root();
    let mut rest = pattern;

    while let Some(&first) = rest.first() {
        let Some(edge) = node.edge_for(first) else {
            return false;
        };

        let label = tree.label(edge);
        let matched = label.len().min(rest.len());
        if label[..matched] != rest[..matched] {
            return false;
        }
        rest = &rest[matched..];
        if rest.is_empty() {
            break;
        }

        match edge.end_node().and_then(|id| tree.node(id)) {
            Some(next) => node = next,
            None => return false,
        }
    }

    true
}

/// Longest substring occurring at least twice (label of the deepest internal node)
pub fn longest_repeat(tree: &SuffixTree) -> &[u8] {
    node_spans(tree)
        .into_iter()
        .flatten()
        .max_by_key(|span| span.depth)
        .map(|span| span_label(tree, span))
        .unwrap_or_default()
}

/// Check every suffix link: a node labeled `a·w` must link to the node labeled `w`
pub fn verify_suffix_links(tree: &SuffixTree) -> TreeResult<()> {
    let spans = node_spans(tree);
    let phase = tree.len().saturating_sub(1);

    for node in tree.nodes() {
        let id = node.id();
        let target = node
            .suffix_link()
            .ok_or(SuffixTreeError::DanglingSuffixLink { phase, node: id })?;
        let mismatch = SuffixTreeError::SuffixLinkMismatch { node: id, target };

        if id == ROOT {
            if target != ROOT {
                return Err(mismatch);
            }
            continue;
        }

        let (Some(from), Some(to)) = (
            spans[id],
            spans.get(target).copied().flatten(),
        ) else {
            return Err(mismatch);
        };

        if from.depth == 0 || span_label(tree, from)[1..] != *span_label(tree, to) {
            return Err(mismatch);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeConfig;

    fn banana() -> SuffixTree {
        SuffixTree::with_config(b"banana", TreeConfig::terminated(b'$')).unwrap()
    }

    #[test]
    fn test_contains() {
        let tree = banana();
        for pattern in [&b""[..], b"b", b"ana", b"nana$", b"banana$", b"an"] {
            assert!(contains(&tree, pattern), "{:?}", pattern);
        }
        for pattern in [&b"x"[..], b"bb", b"nab", b"banana$$", b"aa"] {
            assert!(!contains(&tree, pattern), "{:?}", pattern);
        }
    }

    #[test]
    fn test_contains_implicit_suffix() {
        let tree = SuffixTree::new(b"abab").unwrap();
        assert!(contains(&tree, b"ab"));
        assert!(contains(&tree, b"b"));
        assert!(!contains(&tree, b"abb"));
    }

    #[test]
    fn test_path_labels() {
        let tree = banana();
        let mut labels: Vec<&[u8]> = (1..tree.node_count())
            .filter_map(|id| path_label(&tree, id))
            .collect();
        labels.sort();

        assert_eq!(labels, vec![&b"a"[..], b"ana", b"na"]);
        assert_eq!(path_label(&tree, ROOT), Some(&b""[..]));
        assert_eq!(path_label(&tree, 99), None);
    }

    #[test]
    fn test_longest_repeat() {
        assert_eq!(longest_repeat(&banana()), b"ana");

        let tree = SuffixTree::new(b"abcd").unwrap();
        assert_eq!(longest_repeat(&tree), b"");
    }

    #[test]
    fn test_verify_suffix_links() {
        assert_eq!(verify_suffix_links(&banana()), Ok(()));

        let tree = SuffixTree::new(b"abcabxabcd").unwrap();
        assert_eq!(verify_suffix_links(&tree), Ok(()));
    }
}
