//! KEGG REST client
//!
//! Fetches raw text and hands it to the parsers. Transport failures surface as
//! [`KeggError::Network`], a 404 as [`KeggError::NotFound`]. Requests are not
//! retried.

use kegg_common::{KeggError, Result};
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};

use crate::config::KeggConfig;
use crate::description::{Description, DescriptionParser};
use crate::pathways::{self, PathwayTable};

/// Most identifiers the `get` operation accepts in one request
pub const MAX_ENTRIES_PER_REQUEST: usize = 10;

/// Client for the KEGG REST API
pub struct KeggClient {
    http: reqwest::Client,
    config: KeggConfig,
    parser: DescriptionParser,
}

impl KeggClient {
    /// Create a client, validating the configuration first
    pub fn new(config: KeggConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("kegg-ingest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| KeggError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            parser: DescriptionParser::new(),
        })
    }

    /// Use a parser with a customised keyword table
    pub fn with_parser(mut self, parser: DescriptionParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &KeggConfig {
        &self.config
    }

    /// Raw lines of an entry, newlines stripped
    #[instrument(skip(self))]
    pub async fn fetch_description_lines(&self, identifier: &str) -> Result<Vec<String>> {
        let url = self.config.description_url(identifier);
        let body = self.get_text(&url).await?;
        Ok(body.lines().map(str::to_string).collect())
    }

    /// Fetch and parse one entry
    #[instrument(skip(self))]
    pub async fn fetch_description(&self, identifier: &str) -> Result<Description> {
        let lines = self.fetch_description_lines(identifier).await?;
        let description = self.parser.parse(&lines);

        if description.is_empty() {
            warn!(identifier, lines = lines.len(), "Entry has no modelled keywords");
        } else {
            info!(
                identifier,
                pathways = description.pathways().len(),
                dblinks = description.dblinks().len(),
                "Parsed KEGG entry"
            );
        }

        Ok(description)
    }

    /// Fetch and parse several entries with a single request
    #[instrument(skip(self))]
    pub async fn fetch_descriptions(&self, identifiers: &[&str]) -> Result<Vec<Description>> {
        if identifiers.is_empty() {
            return Ok(Vec::new());
        }
        if identifiers.len() > MAX_ENTRIES_PER_REQUEST {
            return Err(KeggError::Config(format!(
                "At most {} identifiers per request, got {}",
                MAX_ENTRIES_PER_REQUEST,
                identifiers.len()
            )));
        }

        let lines = self.fetch_description_lines(&identifiers.join("+")).await?;
        let entries = self.parser.parse_entries(&lines);
        info!(requested = identifiers.len(), parsed = entries.len(), "Parsed KEGG entries");
        Ok(entries)
    }

    /// Fetch the pathway listing from `url`, or from the configured listing URL
    #[instrument(skip(self))]
    pub async fn fetch_pathway_table(&self, url: Option<&str>) -> Result<PathwayTable> {
        let url = url.map_or_else(|| self.config.pathways_url(), str::to_string);
        let body = self.get_text(&url).await?;
        let table = pathways::parse_tsv(&body)?;
        info!(url = %url, pathways = table.len(), "Loaded pathway names");
        Ok(table)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| KeggError::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(KeggError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(KeggError::Network(format!("{} returned {}", url, status)));
        }

        response
            .text()
            .await
            .map_err(|e| KeggError::Network(format!("Failed to read body from {}: {}", url, e)))
    }
}
