//! KEGG flat-file entry parser
//!
//! Parses the text returned by `https://rest.kegg.jp/get/<id>`:
//!
//! ```text
//! ENTRY       5214              CDS       T01001
//! NAME        PFKP, ATPF, PFK-C, PFKF
//! PATHWAY     hsa00010  Glycolysis / Gluconeogenesis
//!             hsa04151  PI3K-Akt signaling pathway
//! DBLINKS     NCBI-GeneID: 5214
//! ///
//! ```
//!
//! A line that starts in column 0 opens a keyword; an indented line continues the
//! last keyword. What happens to a line's payload is decided by the keyword's
//! [`FieldPolicy`]. Lines that cannot be attributed to a keyword are skipped and
//! logged, never reported as errors.

use kegg_common::Result;
use std::collections::HashMap;
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, trace};

use super::fields::{Cardinality, FieldPolicy, DEFAULT_FIELD_POLICIES};
use super::models::Description;

/// Line separating entries when several are returned in one body
pub const ENTRY_TERMINATOR: &str = "///";

/// Reasons a line is skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("line {line_num}: no keyword on a non-continuation line")]
    MalformedLine { line_num: usize },

    #[error("line {line_num}: continuation line before any keyword")]
    OrphanContinuation { line_num: usize },
}

/// A classified input line
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Keyword { keyword: &'a str, payload: &'a str },
    Continuation { payload: &'a str },
}

fn classify(line: &str, line_num: usize) -> std::result::Result<Line<'_>, LineError> {
    if line.starts_with(char::is_whitespace) {
        return Ok(Line::Continuation {
            payload: line.trim(),
        });
    }
    if line.is_empty() {
        return Err(LineError::MalformedLine { line_num });
    }

    // The keyword ends at the first whitespace character, which is dropped with it
    let (keyword, payload) = match line.find(char::is_whitespace) {
        Some(pos) => {
            let separator_len = line[pos..].chars().next().map_or(1, char::len_utf8);
            (&line[..pos], &line[pos + separator_len..])
        },
        None => (line, ""),
    };

    Ok(Line::Keyword { keyword, payload })
}

/// Parser for KEGG entry records
///
/// Holds only the keyword policy table; every parse call owns its own state, so
/// one parser can be shared across threads.
#[derive(Debug, Clone)]
pub struct DescriptionParser {
    policies: HashMap<String, FieldPolicy>,
}

impl DescriptionParser {
    /// Create a parser for `ENTRY`, `PATHWAY` and `DBLINKS`
    pub fn new() -> Self {
        let policies = DEFAULT_FIELD_POLICIES
            .iter()
            .map(|(keyword, policy)| (keyword.to_string(), *policy))
            .collect();
        Self { policies }
    }

    /// Model an additional keyword, or change how an existing one is handled
    pub fn with_policy(mut self, keyword: impl Into<String>, policy: FieldPolicy) -> Self {
        self.policies.insert(keyword.into(), policy);
        self
    }

    pub fn policy(&self, keyword: &str) -> Option<FieldPolicy> {
        self.policies.get(keyword).copied()
    }

    /// Parse the lines of exactly one entry
    ///
    /// Lines must already have their newline stripped. The input may stop at any
    /// line; no terminator is required.
    pub fn parse<I, S>(&self, lines: I) -> Description
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = EntryBuilder::new(&self.policies);
        for line in lines {
            builder.feed(line.as_ref());
        }
        builder.finish()
    }

    /// Parse one entry held in a string
    pub fn parse_str(&self, text: &str) -> Description {
        self.parse(text.lines())
    }

    /// Parse one entry from a reader, stopping on the first I/O error
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Description> {
        let mut builder = EntryBuilder::new(&self.policies);
        for line in reader.lines() {
            let line = line?;
            builder.feed(line.trim_end_matches('\r'));
        }
        Ok(builder.finish())
    }

    /// Parse a stream holding several `///`-terminated entries
    ///
    /// Each entry gets fresh state. Chunks holding only blank lines (for example
    /// after a trailing terminator) produce nothing.
    pub fn parse_entries<I, S>(&self, lines: I) -> Vec<Description>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut builder = EntryBuilder::new(&self.policies);

        for line in lines {
            let line = line.as_ref();
            if is_terminator(line) {
                let finished = std::mem::replace(&mut builder, EntryBuilder::new(&self.policies));
                entries.extend(finished.finish_nonempty());
            } else {
                builder.feed(line);
            }
        }
        entries.extend(builder.finish_nonempty());

        debug!("Parsed {} entries", entries.len());
        entries
    }

    /// [`parse_entries`](Self::parse_entries) over a reader
    pub fn parse_entries_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Description>> {
        let lines = reader
            .lines()
            .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(self.parse_entries(lines))
    }
}

impl Default for DescriptionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Group lines into per-entry chunks at `///` terminators
///
/// Terminator lines are dropped, as are chunks holding only blank lines.
pub fn split_entries<I, S>(lines: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if is_terminator(line) {
            if has_content(&current) {
                chunks.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push(line.to_string());
        }
    }
    if has_content(&current) {
        chunks.push(current);
    }

    chunks
}

fn is_terminator(line: &str) -> bool {
    line.trim_end() == ENTRY_TERMINATOR
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn has_content(chunk: &[String]) -> bool {
    chunk.iter().any(|line| !is_blank(line))
}

/// Per-call parse state
struct EntryBuilder<'p> {
    policies: &'p HashMap<String, FieldPolicy>,
    description: Description,
    current_keyword: Option<String>,
    line_num: usize,
    saw_content: bool,
}

impl<'p> EntryBuilder<'p> {
    fn new(policies: &'p HashMap<String, FieldPolicy>) -> Self {
        Self {
            policies,
            description: Description::new(),
            current_keyword: None,
            line_num: 0,
            saw_content: false,
        }
    }

    fn feed(&mut self, line: &str) {
        self.line_num += 1;
        let line_num = self.line_num;
        self.saw_content |= !is_blank(line);

        let payload = match classify(line, line_num) {
            Ok(Line::Keyword { keyword, payload }) => {
                if self.current_keyword.as_deref() != Some(keyword) {
                    self.current_keyword = Some(keyword.to_string());
                }
                payload
            },
            Ok(Line::Continuation { payload }) => {
                if self.current_keyword.is_none() {
                    let err = LineError::OrphanContinuation { line_num };
                    debug!("Skipping line: {}", err);
                    return;
                }
                payload
            },
            Err(err) => {
                debug!("Skipping line: {}", err);
                return;
            },
        };

        let Some(keyword) = self.current_keyword.as_deref() else {
            return;
        };

        let Some(policy) = self.policies.get(keyword) else {
            trace!(keyword, line_num, "Ignoring unmodelled keyword");
            return;
        };

        let tuple = policy.split_rule.split(payload);
        if tuple.is_empty() {
            debug!(keyword, line_num, "Skipping empty payload");
            return;
        }

        match policy.cardinality {
            Cardinality::Single => {
                if self.description.set_single(keyword, tuple).is_some() {
                    debug!(keyword, line_num, "Replaced earlier value of single-valued keyword");
                }
            },
            Cardinality::Repeated => {
                trace!(keyword, line_num, "Appending field tuple");
                self.description.push_repeated(keyword, tuple);
            },
        }
    }

    fn finish(self) -> Description {
        self.description
    }

    /// `None` when only blank lines were fed
    fn finish_nonempty(self) -> Option<Description> {
        self.saw_content.then_some(self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keyword_line() {
        let line = classify("PATHWAY     hsa00010  Glycolysis", 1).unwrap();
        assert_eq!(
            line,
            Line::Keyword {
                keyword: "PATHWAY",
                payload: "    hsa00010  Glycolysis",
            }
        );
    }

    #[test]
    fn test_classify_bare_keyword() {
        let line = classify("DBLINKS", 1).unwrap();
        assert_eq!(
            line,
            Line::Keyword {
                keyword: "DBLINKS",
                payload: "",
            }
        );
    }

    #[test]
    fn test_classify_continuation_is_trimmed() {
        let line = classify("\t  hsa04151  PI3K-Akt signaling pathway  ", 2).unwrap();
        assert_eq!(
            line,
            Line::Continuation {
                payload: "hsa04151  PI3K-Akt signaling pathway",
            }
        );
    }

    #[test]
    fn test_classify_empty_line_is_malformed() {
        assert_eq!(classify("", 9), Err(LineError::MalformedLine { line_num: 9 }));
    }

    #[test]
    fn test_builder_tracks_line_numbers() {
        let parser = DescriptionParser::new();
        let mut builder = EntryBuilder::new(&parser.policies);
        builder.feed("ENTRY       5214");
        builder.feed("");
        builder.feed("            extra");
        assert_eq!(builder.line_num, 3);
        assert_eq!(builder.current_keyword.as_deref(), Some("ENTRY"));
    }

    #[test]
    fn test_finish_nonempty() {
        let parser = DescriptionParser::new();
        assert!(EntryBuilder::new(&parser.policies).finish_nonempty().is_none());

        let mut blank = EntryBuilder::new(&parser.policies);
        blank.feed("");
        blank.feed("   ");
        assert!(blank.finish_nonempty().is_none());

        let mut builder = EntryBuilder::new(&parser.policies);
        builder.feed("NAME        PFKP");
        let description = builder.finish_nonempty().unwrap();
        assert!(description.is_empty());
    }
}
