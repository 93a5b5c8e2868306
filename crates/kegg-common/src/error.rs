//! Error types for KEGG ingestion

use thiserror::Error;

/// Result type alias for KEGG operations
pub type Result<T> = std::result::Result<T, KeggError>;

/// Main error type for KEGG ingestion
///
/// The record parser and the pair loader never produce these for in-memory input.
/// They come from the collaborators around them: reading files, talking to the
/// REST API and decoding tab-separated listings.
#[derive(Error, Debug)]
pub enum KeggError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl KeggError {
    /// Shorthand for a [`KeggError::Parse`] carrying a line number
    pub fn parse_at(line_num: usize, message: impl std::fmt::Display) -> Self {
        KeggError::Parse(format!("line {}: {}", line_num, message))
    }
}
