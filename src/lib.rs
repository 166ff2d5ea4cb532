//! # SFX - Online Suffix Trees
//!
//! SFX builds suffix trees with Ukkonen's online algorithm in amortized
//! linear time, then derives the alphabetical suffix order and the
//! Burrows-Wheeler transform from them.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Node/edge arena and the online construction engine
//! - [`query`] - Read-only traversals (suffixes, suffix lengths, BWT, lookup)
//! - [`report`] - Per-input reports for the command-line front end
//! - [`output`] - Report formatting (colored text or JSON)
//! - [`utils`] - Configuration, input loading, progress bars
//!
//! ## Quick Start
//!
//! ```
//! use sfx::tree::{SuffixTree, TreeConfig};
//!
//! let tree = SuffixTree::with_config(b"banana", TreeConfig::terminated(b'$')).unwrap();
//! let query = tree.query();
//!
//! assert_eq!(query.enumerate_suffixes()[0], b"$");
//! assert_eq!(query.compute_bwt(), b"annb$aa");
//! ```
//!
//! ## Terminators
//!
//! No sentinel is appended unless [`tree::TreeConfig::terminator`] is set.
//! Without one, a suffix that also occurs earlier in the text ends in the
//! middle of an edge and gets no leaf: `"aa"` yields the single suffix
//! `"aa"`, and [`tree::SuffixTree::implicit_suffixes`] reports the missing
//! one. Configure a terminator that does not occur in the text to get one
//! leaf per suffix and a full-length BWT.

pub mod output;
pub mod query;
pub mod report;
pub mod tree;
pub mod utils;
