//! KEGG Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Turns KEGG flat-file text into structured data.
//!
//! # Components
//!
//! - **description**: the entry parser (`ENTRY`, `PATHWAY`, `DBLINKS`, continuation lines)
//! - **pathways**: pathway identifier to name lookup from tab-separated listings
//! - **client**: fetches both from the KEGG REST API
//! - **config**: API location and timeouts from the environment
//!
//! The parsers do no I/O of their own and can be fed from any source.
//!
//! # Example
//!
//! ```no_run
//! use kegg_ingest::{KeggClient, KeggConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = KeggClient::new(KeggConfig::from_env()?)?;
//!     let gene = client.fetch_description("hsa:5214").await?;
//!     let names = client.fetch_pathway_table(None).await?;
//!
//!     for pathway in gene.pathways() {
//!         println!("{} -> {:?}", pathway[0], names.get(&pathway[0]));
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod description;
pub mod pathways;

pub use client::KeggClient;
pub use config::KeggConfig;
pub use description::{Description, DescriptionParser, FieldValue};
pub use pathways::PathwayTable;
