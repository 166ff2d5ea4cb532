#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sfx::tree::{SuffixTreeBuilder, TreeConfig};

#[derive(Arbitrary, Debug)]
struct Input {
    chunks: Vec<Vec<u8>>,
}

fuzz_target!(|input: Input| {
    // Zero is reserved for the terminator
    let text: Vec<u8> = input.chunks.concat().into_iter().filter(|&b| b != 0).collect();

    // Feed in arbitrary chunk sizes; must match a batch build
    let mut builder = SuffixTreeBuilder::new(TreeConfig::terminated(0));
    for chunk in &input.chunks {
        let chunk: Vec<u8> = chunk.iter().copied().filter(|&b| b != 0).collect();
        builder.extend(&chunk).expect("no terminator in input");
    }
    let online = builder.finish().expect("terminated build never fails");

    let batch = SuffixTreeBuilder::new(TreeConfig::terminated(0))
        .build(&text)
        .expect("terminated build never fails");

    let bwt = online.query().compute_bwt();
    assert_eq!(bwt.len(), text.len() + 1);
    assert_eq!(bwt.iter().filter(|&&b| b == 0).count(), 1);
    assert_eq!(bwt, batch.query().compute_bwt());
    assert_eq!(online.leaf_count(), text.len() + 1);
});
