//! Per-keyword field policies
//!
//! Each modelled keyword maps to a [`FieldPolicy`]: whether the keyword holds one
//! tuple or accumulates a list of them, and how a line's payload is cut into fields.
//! Supporting a new keyword means adding a row to [`DEFAULT_FIELD_POLICIES`] (or
//! registering one through `DescriptionParser::with_policy`), not touching the parser.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Ordered, position-significant fields extracted from one line
pub type FieldTuple = Vec<String>;

/// Two or more consecutive whitespace characters
#[allow(clippy::expect_used)]
static WIDE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("literal pattern compiles"));

/// How a payload is cut into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    /// Any whitespace run separates fields (`ENTRY   5214   CDS   T01001`)
    Whitespace,
    /// Only runs of two or more whitespace characters separate fields, so a
    /// single space stays inside a field (`hsa00010  Glycolysis / Gluconeogenesis`)
    WideWhitespace,
}

impl SplitRule {
    /// Split a payload into trimmed fields
    ///
    /// A payload that is empty after trimming yields an empty tuple.
    pub fn split(self, payload: &str) -> FieldTuple {
        let payload = payload.trim();
        if payload.is_empty() {
            return FieldTuple::new();
        }

        match self {
            SplitRule::Whitespace => payload.split_whitespace().map(str::to_string).collect(),
            SplitRule::WideWhitespace => WIDE_WHITESPACE
                .split(payload)
                .map(|field| field.trim().to_string())
                .collect(),
        }
    }
}

/// Whether a keyword keeps one tuple or a list of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Later lines replace earlier ones
    Single,
    /// Every line appends, in source order
    Repeated,
}

/// Cardinality and split rule for one keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPolicy {
    pub cardinality: Cardinality,
    pub split_rule: SplitRule,
}

impl FieldPolicy {
    pub const fn single(split_rule: SplitRule) -> Self {
        Self {
            cardinality: Cardinality::Single,
            split_rule,
        }
    }

    pub const fn repeated(split_rule: SplitRule) -> Self {
        Self {
            cardinality: Cardinality::Repeated,
            split_rule,
        }
    }
}

pub const ENTRY: &str = "ENTRY";
pub const PATHWAY: &str = "PATHWAY";
pub const DBLINKS: &str = "DBLINKS";

/// Keywords modelled out of the box; anything else in a record is ignored
pub const DEFAULT_FIELD_POLICIES: &[(&str, FieldPolicy)] = &[
    (ENTRY, FieldPolicy::single(SplitRule::Whitespace)),
    (PATHWAY, FieldPolicy::repeated(SplitRule::WideWhitespace)),
    (DBLINKS, FieldPolicy::repeated(SplitRule::WideWhitespace)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_whitespace_keeps_single_spaces() {
        let fields = SplitRule::WideWhitespace.split("hsa00010  Glycolysis / Gluconeogenesis");
        assert_eq!(fields, vec!["hsa00010", "Glycolysis / Gluconeogenesis"]);
    }

    #[test]
    fn test_wide_whitespace_accepts_tabs_and_long_runs() {
        let fields = SplitRule::WideWhitespace.split("  hsa04151 \t PI3K-Akt signaling pathway   ");
        assert_eq!(fields, vec!["hsa04151", "PI3K-Akt signaling pathway"]);
    }

    #[test]
    fn test_whitespace_splits_every_run() {
        let fields = SplitRule::Whitespace.split("5214              CDS       T01001");
        assert_eq!(fields, vec!["5214", "CDS", "T01001"]);
    }

    #[test]
    fn test_blank_payload_is_empty_tuple() {
        assert!(SplitRule::Whitespace.split("   ").is_empty());
        assert!(SplitRule::WideWhitespace.split("").is_empty());
    }

    #[test]
    fn test_default_table() {
        let lookup = |keyword: &str| {
            DEFAULT_FIELD_POLICIES
                .iter()
                .find(|(k, _)| *k == keyword)
                .map(|(_, policy)| *policy)
        };

        assert_eq!(lookup("ENTRY"), Some(FieldPolicy::single(SplitRule::Whitespace)));
        assert_eq!(lookup("PATHWAY"), Some(FieldPolicy::repeated(SplitRule::WideWhitespace)));
        assert_eq!(lookup("DBLINKS"), Some(FieldPolicy::repeated(SplitRule::WideWhitespace)));
        assert_eq!(lookup("NAME"), None);
        assert_eq!(lookup("entry"), None);
    }
}
