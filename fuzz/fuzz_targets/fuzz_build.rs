#![no_main]

use libfuzzer_sys::fuzz_target;
use sfx::tree::{SuffixTree, TreeConfig};

fuzz_target!(|data: &[u8]| {
    // Unterminated build over arbitrary bytes, case folding on odd lengths
    let config = TreeConfig {
        terminator: None,
        case_insensitive: data.len() % 2 == 1,
    };
    let tree = SuffixTree::with_config(data, config).expect("unterminated build never fails");

    assert_eq!(tree.leaf_count() + tree.implicit_suffixes(), data.len());
    tree.query().verify_suffix_links().expect("suffix links are consistent");
    assert_eq!(tree.query().suffix_length_array().len(), tree.leaf_count());
});
