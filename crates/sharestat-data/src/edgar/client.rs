//! SEC EDGAR company-concept client.

use crate::edgar::cik::Cik;
use crate::error::{DataError, Result};
use crate::model::{ConceptDocument, EntitySummary};
use crate::snapshot;
use crate::source::ConceptSource;
use reqwest::Url;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// SEC EDGAR XBRL API base URL
pub const EDGAR_API_BASE: &str = "https://data.sec.gov/api/xbrl";

/// EDGAR company browse page
pub const EDGAR_BROWSE_URL: &str = "https://www.sec.gov/edgar/browse/";

/// Public relay that forwards the `url` query parameter
pub const RELAY_BASE: &str = "https://api.aipipe.ai/proxy/";

/// User agent for SEC EDGAR requests (SEC requires identifying information)
pub const USER_AGENT: &str = "sharestat/0.1 (contact: opensource@example.com)";

/// Taxonomy of the shares outstanding concept
pub const SHARES_TAXONOMY: &str = "dei";

/// Shares outstanding concept tag
pub const SHARES_CONCEPT: &str = "EntityCommonStockSharesOutstanding";

/// Company-concept URL for the shares outstanding series of `cik`.
pub fn concept_url(api_base: &str, cik: &Cik) -> String {
    format!(
        "{}/companyconcept/CIK{}/{}/{}.json",
        api_base.trim_end_matches('/'),
        cik,
        SHARES_TAXONOMY,
        SHARES_CONCEPT
    )
}

/// EDGAR browse page for `cik`.
pub fn browse_url(cik: &Cik) -> String {
    format!("{EDGAR_BROWSE_URL}?CIK={cik}")
}

/// Wraps `target` as the escaped `url` query parameter of `relay_base`.
pub fn relay_url(relay_base: &str, target: &str) -> Result<String> {
    Url::parse_with_params(relay_base, &[("url", target)])
        .map(String::from)
        .map_err(|e| DataError::InvalidUrl(format!("{relay_base}: {e}")))
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Value of the `User-Agent` identification header
    pub user_agent: String,
    /// XBRL API base URL
    pub api_base: String,
    /// Relay endpoint used for non-default identifiers
    pub relay_base: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            api_base: EDGAR_API_BASE.to_string(),
            relay_base: RELAY_BASE.to_string(),
            timeout: None,
        }
    }
}

/// Fetches the shares outstanding concept, directly or through the relay.
pub struct ConceptClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ConceptClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with a custom configuration
    ///
    /// # Example
    /// ```no_run
    /// use sharestat_data::edgar::{ClientConfig, ConceptClient};
    /// use std::time::Duration;
    ///
    /// # fn example() -> sharestat_data::Result<()> {
    /// let client = ConceptClient::with_config(ClientConfig {
    ///     user_agent: "Example Corp admin@example.com".to_string(),
    ///     timeout: Some(Duration::from_secs(30)),
    ///     ..ClientConfig::default()
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(DataError::Network)?;

        Ok(Self { client, config })
    }

    /// The active configuration.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Direct company-concept URL for `cik`.
    pub fn concept_url(&self, cik: &Cik) -> String {
        concept_url(&self.config.api_base, cik)
    }

    /// Relayed company-concept URL for `cik`.
    pub fn relayed_concept_url(&self, cik: &Cik) -> Result<String> {
        relay_url(&self.config.relay_base, &self.concept_url(cik))
    }

    /// Fetch the shares outstanding concept straight from EDGAR.
    pub async fn fetch_concept(&self, cik: &Cik) -> Result<ConceptDocument> {
        let url = self.concept_url(cik);
        self.get_document(&url).await
    }

    /// Fetch the shares outstanding concept through the relay.
    pub async fn fetch_concept_via_relay(&self, cik: &Cik) -> Result<ConceptDocument> {
        let url = self.relayed_concept_url(cik)?;
        self.get_document(&url).await
    }

    async fn get_document(&self, url: &str) -> Result<ConceptDocument> {
        debug!(url, "requesting company concept");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(DataError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(DataError::Network)?;
        debug!(bytes = body.len(), "received company concept");
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(ConceptDocument::from_value(&value))
    }
}

impl ConceptSource for ConceptClient {
    async fn load_snapshot(&self, path: &Path) -> Result<EntitySummary> {
        snapshot::read_snapshot(path).await
    }

    async fn fetch_direct(&self, cik: &Cik) -> Result<ConceptDocument> {
        self.fetch_concept(cik).await
    }

    async fn fetch_relayed(&self, cik: &Cik) -> Result<ConceptDocument> {
        self.fetch_concept_via_relay(cik).await
    }
}

impl std::fmt::Debug for ConceptClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Cik {
        Cik::parse("0000320193").unwrap()
    }

    #[test]
    fn test_concept_url() {
        assert_eq!(
            concept_url(EDGAR_API_BASE, &Cik::default()),
            "https://data.sec.gov/api/xbrl/companyconcept/CIK0000769397/dei/EntityCommonStockSharesOutstanding.json"
        );
        assert_eq!(
            concept_url("http://localhost:8080/xbrl/", &apple()),
            "http://localhost:8080/xbrl/companyconcept/CIK0000320193/dei/EntityCommonStockSharesOutstanding.json"
        );
    }

    #[test]
    fn test_browse_url() {
        assert_eq!(
            browse_url(&apple()),
            "https://www.sec.gov/edgar/browse/?CIK=0000320193"
        );
    }

    #[test]
    fn test_relay_url_escapes_target() {
        let url = relay_url(RELAY_BASE, &concept_url(EDGAR_API_BASE, &apple())).unwrap();
        assert_eq!(
            url,
            "https://api.aipipe.ai/proxy/?url=https%3A%2F%2Fdata.sec.gov%2Fapi%2Fxbrl%2Fcompanyconcept%2FCIK0000320193%2Fdei%2FEntityCommonStockSharesOutstanding.json"
        );
    }

    #[test]
    fn test_relay_url_invalid_base() {
        let result = relay_url("not a url", "https://data.sec.gov");
        assert!(matches!(result, Err(DataError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_uses_config() {
        let client = ConceptClient::with_config(ClientConfig {
            api_base: "http://127.0.0.1:9/xbrl".to_string(),
            relay_base: "http://127.0.0.1:9/relay".to_string(),
            timeout: Some(Duration::from_secs(1)),
            ..ClientConfig::default()
        })
        .unwrap();

        assert_eq!(
            client.concept_url(&apple()),
            "http://127.0.0.1:9/xbrl/companyconcept/CIK0000320193/dei/EntityCommonStockSharesOutstanding.json"
        );
        assert!(
            client
                .relayed_concept_url(&apple())
                .unwrap()
                .starts_with("http://127.0.0.1:9/relay?url=http%3A%2F%2F127.0.0.1%3A9%2Fxbrl")
        );
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_network_error() {
        let client = ConceptClient::with_config(ClientConfig {
            api_base: "http://127.0.0.1:9/xbrl".to_string(),
            timeout: Some(Duration::from_secs(2)),
            ..ClientConfig::default()
        })
        .unwrap();

        let result = client.fetch_concept(&apple()).await;
        assert!(matches!(result, Err(DataError::Network(_))));
    }

    #[tokio::test]
    #[ignore = "requires network access to SEC EDGAR"]
    async fn test_fetch_concept_live() {
        let client = ConceptClient::new().unwrap();
        let doc = client.fetch_concept(&Cik::default()).await.unwrap();
        assert!(doc.entity_name().is_some());
        assert!(!doc.shares().is_empty());
    }
}
