//! KEGG entry data models

use kegg_common::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::fields::{FieldTuple, DBLINKS, ENTRY, PATHWAY};

/// Value stored under one keyword
///
/// Serializes without a tag: `Single` as an array of strings, `Repeated` as an
/// array of arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(FieldTuple),
    Repeated(Vec<FieldTuple>),
}

impl FieldValue {
    pub fn as_single(&self) -> Option<&[String]> {
        match self {
            FieldValue::Single(tuple) => Some(tuple),
            FieldValue::Repeated(_) => None,
        }
    }

    pub fn as_repeated(&self) -> Option<&[FieldTuple]> {
        match self {
            FieldValue::Single(_) => None,
            FieldValue::Repeated(tuples) => Some(tuples),
        }
    }
}

/// One parsed KEGG entry: keyword to accumulated fields
///
/// Built in a single pass by `DescriptionParser` and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description {
    fields: BTreeMap<String, FieldValue>,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value recorded for a keyword (case-sensitive)
    pub fn get(&self, keyword: &str) -> Option<&FieldValue> {
        self.fields.get(keyword)
    }

    /// `ENTRY` fields, e.g. `["5214", "CDS", "T01001"]`
    pub fn entry(&self) -> Option<&[String]> {
        self.get(ENTRY).and_then(FieldValue::as_single)
    }

    /// `PATHWAY` tuples in source order, `(code, name)`
    pub fn pathways(&self) -> &[FieldTuple] {
        self.repeated(PATHWAY)
    }

    /// `DBLINKS` tuples in source order
    pub fn dblinks(&self) -> &[FieldTuple] {
        self.repeated(DBLINKS)
    }

    /// Tuples for a repeated keyword, empty when absent
    pub fn repeated(&self, keyword: &str) -> &[FieldTuple] {
        self.get(keyword)
            .and_then(FieldValue::as_repeated)
            .unwrap_or(&[])
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Store a single-valued keyword, returning the value it replaced
    pub(crate) fn set_single(&mut self, keyword: &str, tuple: FieldTuple) -> Option<FieldValue> {
        self.fields
            .insert(keyword.to_string(), FieldValue::Single(tuple))
    }

    /// Append a tuple to a repeated keyword, creating the list on first use
    pub(crate) fn push_repeated(&mut self, keyword: &str, tuple: FieldTuple) {
        match self.fields.get_mut(keyword) {
            Some(FieldValue::Repeated(tuples)) => tuples.push(tuple),
            _ => {
                self.fields
                    .insert(keyword.to_string(), FieldValue::Repeated(vec![tuple]));
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(fields: &[&str]) -> FieldTuple {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_accessors_on_empty_description() {
        let description = Description::new();
        assert!(description.is_empty());
        assert_eq!(description.entry(), None);
        assert!(description.pathways().is_empty());
        assert!(description.dblinks().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut description = Description::new();
        description.set_single("ENTRY", tuple(&["5214", "CDS", "T01001"]));
        description.push_repeated("PATHWAY", tuple(&["hsa00010", "Glycolysis / Gluconeogenesis"]));

        let value: serde_json::Value =
            serde_json::from_str(&description.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ENTRY": ["5214", "CDS", "T01001"],
                "PATHWAY": [["hsa00010", "Glycolysis / Gluconeogenesis"]],
            })
        );

        let back: Description = serde_json::from_value(value).unwrap();
        assert_eq!(back, description);
    }

    #[test]
    fn test_set_single_reports_replaced_value() {
        let mut description = Description::new();
        assert!(description.set_single("ENTRY", tuple(&["1"])).is_none());
        let previous = description.set_single("ENTRY", tuple(&["2"]));
        assert_eq!(previous, Some(FieldValue::Single(tuple(&["1"]))));
        assert_eq!(description.entry(), Some(&["2".to_string()][..]));
    }
}
