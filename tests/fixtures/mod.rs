//! Shared helpers for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;

/// Random text of `len` bytes drawn from `alphabet`
pub fn random_text(rng: &mut StdRng, len: usize, alphabet: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// All suffixes of `text`, sorted by brute force
pub fn sorted_suffixes(text: &[u8]) -> Vec<Vec<u8>> {
    let mut suffixes: Vec<Vec<u8>> = (0..text.len()).map(|i| text[i..].to_vec()).collect();
    suffixes.sort();
    suffixes
}

/// Invert a BWT whose text ends with `sentinel`, the smallest byte in it
///
/// Last-to-first mapping: row 0 of the sorted rotations starts with the
/// sentinel, so its BWT byte is the one preceding the sentinel in the text.
pub fn inverse_bwt(bwt: &[u8], sentinel: u8) -> Vec<u8> {
    let n = bwt.len();
    if n == 0 {
        return Vec::new();
    }

    let mut counts = [0usize; 256];
    let mut rank = Vec::with_capacity(n);
    for &b in bwt {
        rank.push(counts[b as usize]);
        counts[b as usize] += 1;
    }

    let mut first = [0usize; 256];
    let mut total = 0;
    for (b, &count) in counts.iter().enumerate() {
        first[b] = total;
        total += count;
    }

    let mut out = vec![0u8; n];
    out[n - 1] = sentinel;

    let mut row = 0;
    for k in (0..n - 1).rev() {
        let c = bwt[row];
        out[k] = c;
        row = first[c as usize] + rank[row];
    }

    out
}
