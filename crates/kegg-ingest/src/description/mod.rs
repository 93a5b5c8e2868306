//! KEGG entry descriptions
//!
//! Flat-file records from the KEGG `get` operation, parsed into a [`Description`]:
//! `ENTRY` as one tuple, `PATHWAY` and `DBLINKS` as ordered lists of tuples.
//!
//! ```
//! use kegg_ingest::description;
//!
//! let record = description::parse([
//!     "ENTRY       5214              CDS       T01001",
//!     "PATHWAY     hsa00010  Glycolysis / Gluconeogenesis",
//!     "            hsa04151  PI3K-Akt signaling pathway",
//! ]);
//!
//! assert_eq!(record.entry().unwrap(), ["5214", "CDS", "T01001"]);
//! assert_eq!(record.pathways()[1], ["hsa04151", "PI3K-Akt signaling pathway"]);
//! ```

pub mod fields;
pub mod models;
pub mod parser;

pub use fields::{Cardinality, FieldPolicy, FieldTuple, SplitRule, DEFAULT_FIELD_POLICIES};
pub use models::{Description, FieldValue};
pub use parser::{split_entries, DescriptionParser, LineError, ENTRY_TERMINATOR};

/// Parse one entry with the default keyword table
pub fn parse<I, S>(lines: I) -> Description
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DescriptionParser::new().parse(lines)
}
