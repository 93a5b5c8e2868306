//! KEGG Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the KEGG ingestion workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`KeggError`] and the [`Result`] alias used by library code
//! - **Logging**: tracing subscriber setup driven by [`logging::LogConfig`]
//!
//! # Example
//!
//! ```no_run
//! use kegg_common::logging::{init_logging, LogConfig};
//! use kegg_common::{KeggError, Result};
//!
//! fn run() -> anyhow::Result<()> {
//!     let _guard = init_logging(&LogConfig::from_env()?)?;
//!     let parsed: Result<u32> = "42".parse().map_err(|e| KeggError::Parse(format!("{e}")));
//!     tracing::info!(value = ?parsed, "parsed value");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{KeggError, Result};
