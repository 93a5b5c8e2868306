//! KEGG pathway names
//!
//! The "list pathway" listing maps pathway identifiers to their names, one
//! tab-separated pair per line:
//!
//! ```text
//! hsa00010	Glycolysis / Gluconeogenesis - Homo sapiens (human)
//! hsa00020	Citrate cycle (TCA cycle) - Homo sapiens (human)
//! ```
//!
//! [`parser::read_rows`] decodes the file; [`parser::load`] folds rows into a
//! [`PathwayTable`].

pub mod models;
pub mod parser;

pub use models::PathwayTable;
pub use parser::{load, load_reader, parse_tsv, read_rows};
