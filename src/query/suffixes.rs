//! Suffix enumeration
//!
//! Both traversals run over [`EdgeWalk`], so suffixes come out in the order
//! their leaves are reached: ascending leading byte at every branch, which
//! is lexicographic order of the suffixes.

use super::walk::EdgeWalk;
use crate::tree::SuffixTree;

/// Every suffix that ends at a leaf, in lexicographic order
///
/// Suffixes left implicit (see [`SuffixTree::implicit_suffixes`]) are not
/// reported.
pub fn enumerate_suffixes(tree: &SuffixTree) -> Vec<Vec<u8>> {
    let mut suffixes = Vec::with_capacity(tree.len());
    // Path label of the node the current edge leaves
    let mut path: Vec<u8> = Vec::new();

    for step in EdgeWalk::new(tree) {
        path.truncate(step.depth);
        path.extend_from_slice(tree.label(step.edge));

        if step.edge.is_leaf() {
            suffixes.push(path.clone());
        }
    }

    suffixes
}

/// Lengths of the suffixes [`enumerate_suffixes`] would return, same order
pub fn suffix_length_array(tree: &SuffixTree) -> Vec<usize> {
    EdgeWalk::new(tree)
        .filter(|step| step.edge.is_leaf())
        .map(|step| step.end_depth())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeConfig;

    fn strings(suffixes: Vec<Vec<u8>>) -> Vec<String> {
        suffixes
            .into_iter()
            .map(|s| String::from_utf8(s).unwrap())
            .collect()
    }

    #[test]
    fn test_banana_suffixes() {
        let tree = SuffixTree::with_config(b"banana", TreeConfig::terminated(b'$')).unwrap();

        assert_eq!(
            strings(enumerate_suffixes(&tree)),
            vec!["$", "a$", "ana$", "anana$", "banana$", "na$", "nana$"]
        );
        assert_eq!(suffix_length_array(&tree), vec![1, 2, 4, 6, 7, 3, 5]);
    }

    #[test]
    fn test_single_byte() {
        let tree = SuffixTree::new(b"a").unwrap();
        assert_eq!(strings(enumerate_suffixes(&tree)), vec!["a"]);
        assert_eq!(suffix_length_array(&tree), vec![1]);
    }

    #[test]
    fn test_implicit_suffix_not_reported() {
        let tree = SuffixTree::new(b"aa").unwrap();
        assert_eq!(strings(enumerate_suffixes(&tree)), vec!["aa"]);
        assert_eq!(suffix_length_array(&tree), vec![2]);
    }

    #[test]
    fn test_empty() {
        let tree = SuffixTree::new(b"").unwrap();
        assert!(enumerate_suffixes(&tree).is_empty());
        assert!(suffix_length_array(&tree).is_empty());
    }

    #[test]
    fn test_lengths_decode_to_suffixes() {
        let tree = SuffixTree::with_config(b"mississippi", TreeConfig::terminated(b'$')).unwrap();
        let text = tree.text();
        let decoded: Vec<Vec<u8>> = suffix_length_array(&tree)
            .into_iter()
            .map(|len| text[text.len() - len..].to_vec())
            .collect();

        assert_eq!(decoded, enumerate_suffixes(&tree));
    }
}
