//! KEGG ingestion configuration
//!
//! Where the REST API lives and how long to wait for it. Loaded from environment
//! variables (a `.env` file is honoured by the binary).

use kegg_common::{KeggError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public KEGG REST endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://rest.kegg.jp";

/// Organism whose pathway list is fetched by default (human)
pub const DEFAULT_ORGANISM: &str = "hsa";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// KEGG REST configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeggConfig {
    /// REST API root, without trailing slash
    pub api_base_url: String,
    /// KEGG organism code, e.g. "hsa"
    pub organism: String,
    /// Explicit pathway listing URL; derived from base URL and organism when unset
    #[serde(default)]
    pub pathways_url: Option<String>,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for KeggConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            organism: DEFAULT_ORGANISM.to_string(),
            pathways_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl KeggConfig {
    /// Load configuration from environment variables
    ///
    /// - `KEGG_API_BASE_URL` (default `https://rest.kegg.jp`)
    /// - `KEGG_ORGANISM` (default `hsa`)
    /// - `KEGG_PATHWAYS_URL` (default `{base}/list/pathway/{organism}`)
    /// - `KEGG_REQUEST_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("KEGG_API_BASE_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(organism) = std::env::var("KEGG_ORGANISM") {
            config.organism = organism;
        }

        if let Ok(url) = std::env::var("KEGG_PATHWAYS_URL") {
            config.pathways_url = Some(url);
        }

        if let Ok(secs) = std::env::var("KEGG_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = secs.trim().parse().map_err(|_| {
                KeggError::Config(format!("KEGG_REQUEST_TIMEOUT_SECS is not a number: {}", secs))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Configuration pointing at another API root, e.g. a mock server in tests
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(KeggError::Config(format!(
                "KEGG_API_BASE_URL must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.organism.trim().is_empty() {
            return Err(KeggError::Config("KEGG_ORGANISM must not be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(KeggError::Config(
                "KEGG_REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// URL of the `get` operation for one or more `+`-joined identifiers
    pub fn description_url(&self, identifier: &str) -> String {
        format!("{}/get/{}", self.api_base_url, identifier)
    }

    pub fn pathways_url(&self) -> String {
        self.pathways_url
            .clone()
            .unwrap_or_else(|| format!("{}/list/pathway/{}", self.api_base_url, self.organism))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
