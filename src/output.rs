//! Output formatting for reports (plain text or JSON)

use crate::query::{EdgeRecord, TreeStats};
use crate::report::Report;
use serde_json::json;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes reports to stdout
pub struct Printer {
    stdout: StandardStream,
    json: bool,
}

impl Printer {
    pub fn new(choice: ColorChoice, json: bool) -> Self {
        Self {
            stdout: StandardStream::stdout(choice),
            json,
        }
    }

    /// Print one input's report; `heading` prefixes it with the input name
    pub fn print(&mut self, name: &str, report: &Report, heading: bool) -> io::Result<()> {
        if self.json {
            let value = report_json(name, report);
            writeln!(self.stdout, "{}", value)?;
            return Ok(());
        }

        if heading {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(self.stdout, "{}", name)?;
            self.stdout.reset()?;
        }

        match report {
            Report::Suffixes(suffixes) => {
                for suffix in suffixes {
                    self.stdout.write_all(suffix)?;
                    writeln!(self.stdout)?;
                }
            }
            Report::Lengths(lengths) => {
                for len in lengths {
                    writeln!(self.stdout, "{}", len)?;
                }
            }
            Report::Bwt { bwt, terminator } => self.print_bwt(bwt, *terminator)?,
            Report::Edges(edges) => self.print_edges(edges)?,
            Report::Stats(stats) => self.print_stats(stats)?,
            Report::Check(stats) => {
                self.stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(self.stdout, "ok")?;
                self.stdout.reset()?;
                writeln!(
                    self.stdout,
                    ": {} suffix links verified over {} bytes",
                    stats.suffix_links, stats.text_len
                )?;
            }
        }

        if heading {
            writeln!(self.stdout)?;
        }

        Ok(())
    }

    /// Raw BWT bytes, terminator highlighted
    fn print_bwt(&mut self, bwt: &[u8], terminator: Option<u8>) -> io::Result<()> {
        let Some(terminator) = terminator else {
            self.stdout.write_all(bwt)?;
            return writeln!(self.stdout);
        };

        for chunk in bwt.split_inclusive(|&b| b == terminator) {
            match chunk.split_last() {
                Some((&last, head)) if last == terminator => {
                    self.stdout.write_all(head)?;
                    self.stdout
                        .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                    self.stdout.write_all(&[last])?;
                    self.stdout.reset()?;
                }
                _ => self.stdout.write_all(chunk)?,
            }
        }
        writeln!(self.stdout)
    }

    fn print_edges(&mut self, edges: &[EdgeRecord]) -> io::Result<()> {
        for edge in edges {
            let to = edge
                .to
                .map(|id| id.to_string())
                .unwrap_or_else(|| "*".to_string());

            self.stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.stdout, "{:>5} -> {:<5}", edge.from, to)?;
            self.stdout.reset()?;
            write!(self.stdout, " [{}, {}] ", edge.start, edge.end)?;

            self.stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(self.stdout, "{}", edge.label.escape_debug())?;
            self.stdout.reset()?;
        }
        Ok(())
    }

    fn print_stats(&mut self, stats: &TreeStats) -> io::Result<()> {
        let out = &mut self.stdout;
        writeln!(out, "Text length:       {}", stats.text_len)?;
        writeln!(out, "Nodes:             {}", stats.nodes)?;
        writeln!(out, "Internal nodes:    {}", stats.internal_nodes)?;
        writeln!(out, "Leaves:            {}", stats.leaves)?;
        writeln!(out, "Edges:             {}", stats.edges)?;
        writeln!(out, "Suffix links:      {}", stats.suffix_links)?;
        writeln!(out, "Implicit suffixes: {}", stats.implicit_suffixes)?;
        writeln!(out, "Longest repeat:    {}", stats.longest_repeat)?;
        Ok(())
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// JSON object for one input's report
pub fn report_json(name: &str, report: &Report) -> serde_json::Value {
    match report {
        Report::Suffixes(suffixes) => json!({
            "input": name,
            "suffixes": suffixes.iter().map(|s| lossy(s)).collect::<Vec<_>>(),
        }),
        Report::Lengths(lengths) => json!({
            "input": name,
            "lengths": lengths,
        }),
        Report::Bwt { bwt, .. } => json!({
            "input": name,
            "bwt": lossy(bwt),
        }),
        Report::Edges(edges) => json!({
            "input": name,
            "edges": edges,
        }),
        Report::Stats(stats) => json!({
            "input": name,
            "stats": stats,
        }),
        Report::Check(stats) => json!({
            "input": name,
            "ok": true,
            "stats": stats,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{build_report, ReportKind};
    use crate::tree::TreeConfig;

    #[test]
    fn test_suffixes_json() {
        let report = build_report(ReportKind::Suffixes, b"aa", &TreeConfig::terminated(b'$')).unwrap();
        let value = report_json("x", &report);

        assert_eq!(value["input"], "x");
        assert_eq!(value["suffixes"], json!(["$", "a$", "aa$"]));
    }

    #[test]
    fn test_stats_json() {
        let report = build_report(ReportKind::Stats, b"banana", &TreeConfig::terminated(b'$')).unwrap();
        let value = report_json("banana", &report);

        assert_eq!(value["stats"]["leaves"], 7);
        assert_eq!(value["stats"]["longest_repeat"], 3);
    }

    #[test]
    fn test_edges_json() {
        let report = build_report(ReportKind::Edges, b"a", &TreeConfig::default()).unwrap();
        let value = report_json("a", &report);

        assert_eq!(value["edges"][0]["label"], "a");
        assert!(value["edges"][0]["to"].is_null());
    }
}
