//! Per-input reports produced by the command-line front end

use crate::query::{EdgeRecord, TreeStats};
use crate::tree::{SuffixTree, TreeConfig, TreeResult};

/// What to compute for each input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Suffixes,
    Lengths,
    Bwt,
    Edges,
    Stats,
    Check,
}

/// Result of running one [`ReportKind`] over one tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Suffixes(Vec<Vec<u8>>),
    Lengths(Vec<usize>),
    Bwt {
        bwt: Vec<u8>,
        /// Terminator byte, highlighted when printed
        terminator: Option<u8>,
    },
    Edges(Vec<EdgeRecord>),
    Stats(TreeStats),
    /// Suffix links verified; stats of the checked tree
    Check(TreeStats),
}

impl Report {
    pub fn generate(kind: ReportKind, tree: &SuffixTree) -> TreeResult<Self> {
        let query = tree.query();

        let report = match kind {
            ReportKind::Suffixes => Report::Suffixes(query.enumerate_suffixes()),
            ReportKind::Lengths => Report::Lengths(query.suffix_length_array()),
            ReportKind::Bwt => Report::Bwt {
                bwt: query.compute_bwt(),
                terminator: tree.config().terminator,
            },
            ReportKind::Edges => Report::Edges(query.edge_records()),
            ReportKind::Stats => Report::Stats(query.stats()),
            ReportKind::Check => {
                query.verify_suffix_links()?;
                Report::Check(query.stats())
            }
        };

        Ok(report)
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Suffixes(_) => ReportKind::Suffixes,
            Report::Lengths(_) => ReportKind::Lengths,
            Report::Bwt { .. } => ReportKind::Bwt,
            Report::Edges(_) => ReportKind::Edges,
            Report::Stats(_) => ReportKind::Stats,
            Report::Check(_) => ReportKind::Check,
        }
    }
}

/// Build a tree over `text` and run `kind` over it
pub fn build_report(kind: ReportKind, text: &[u8], config: &TreeConfig) -> TreeResult<Report> {
    let tree = SuffixTree::with_config(text, config.clone())?;
    Report::generate(kind, &tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bwt_report() {
        let report = build_report(ReportKind::Bwt, b"banana", &TreeConfig::terminated(b'$')).unwrap();
        assert_eq!(
            report,
            Report::Bwt {
                bwt: b"annb$aa".to_vec(),
                terminator: Some(b'$'),
            }
        );
        assert_eq!(report.kind(), ReportKind::Bwt);
    }

    #[test]
    fn test_check_report() {
        let report = build_report(ReportKind::Check, b"abcabxabcd", &TreeConfig::default()).unwrap();
        match report {
            Report::Check(stats) => assert_eq!(stats.text_len, 10),
            other => panic!("unexpected report {:?}", other),
        }
    }

    #[test]
    fn test_report_propagates_invalid_input() {
        let result = build_report(ReportKind::Suffixes, b"a$b", &TreeConfig::terminated(b'$'));
        assert!(result.is_err());
    }
}
