//! Pathway listing parser
//!
//! Two layers: [`read_rows`] turns tab-separated text into `(identifier, name)`
//! rows and is the only place a malformed row is reported; [`load`] folds rows that
//! are already known to be pairs into a [`PathwayTable`] and cannot fail.

use kegg_common::{KeggError, Result};
use std::collections::hash_map::Entry;
use std::io::Read;
use tracing::debug;

use super::models::PathwayTable;

/// Build a table from `(identifier, name)` rows
///
/// When an identifier repeats, the later row's name wins. Identifiers are
/// expected to be unique in KEGG listings, so this is not treated as an error.
pub fn load<I, K, V>(rows: I) -> PathwayTable
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut table = PathwayTable::new();

    for (identifier, name) in rows {
        let name = name.into();
        match table.names_mut().entry(identifier.into()) {
            Entry::Occupied(mut slot) => {
                debug!(
                    identifier = %slot.key(),
                    previous = %slot.get(),
                    replacement = %name,
                    "Duplicate pathway identifier, keeping the later name"
                );
                slot.insert(name);
            },
            Entry::Vacant(slot) => {
                slot.insert(name);
            },
        }
    }

    table
}

/// Decode a tab-separated, two-column listing
///
/// There is no header and no quoting; blank lines are skipped. A row with any
/// other number of columns is a [`KeggError::Parse`] naming its line.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<(String, String)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record =
            record.map_err(|e| KeggError::Parse(format!("Failed to read pathway listing: {}", e)))?;
        let line_num = record
            .position()
            .map_or(rows.len() + 1, |pos| pos.line() as usize);

        match (record.len(), record.get(0), record.get(1)) {
            (2, Some(identifier), Some(name)) => {
                rows.push((identifier.to_string(), name.to_string()));
            },
            (columns, _, _) => {
                return Err(KeggError::parse_at(
                    line_num,
                    format!("expected 2 tab-separated columns, got {}", columns),
                ));
            },
        }
    }

    debug!("Read {} pathway rows", rows.len());
    Ok(rows)
}

/// Decode and load a listing held in a string
pub fn parse_tsv(text: &str) -> Result<PathwayTable> {
    Ok(load(read_rows(text.as_bytes())?))
}

/// Decode and load a listing from a reader
pub fn load_reader<R: Read>(reader: R) -> Result<PathwayTable> {
    Ok(load(read_rows(reader)?))
}
