//! Dashboard retrieval and lenient HTML parsing.

use covstat_common::{CovstatError, Result};
use covstat_config::DashboardConfig;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Build the blocking HTTP client shared by every network call.
///
/// Both the dashboard fetch and the statistics query go through here so
/// the same timeout applies to each.
pub fn http_client(timeout_seconds: u64, user_agent: &str) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()
        .map_err(|e| CovstatError::network_with_source("Failed to build HTTP client", e))
}

/// Fail with a network error unless `status` is a 2xx.
pub fn check_status(status: StatusCode, url: &Url) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CovstatError::network_with_status(
            format!("GET {url} returned {status}"),
            status.as_u16(),
        ))
    }
}

/// Parse a response body with the HTML5 tree builder.
///
/// Never fails: unclosed tags and stray markup are repaired the way a
/// browser would.
pub fn parse_document(body: &str) -> Html {
    Html::parse_document(body)
}

/// Retrieves the dashboard page.
pub struct Fetcher {
    client: Client,
    url: Url,
}

impl Fetcher {
    /// Creates a fetcher for the configured dashboard.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let url = Url::parse(&config.url).map_err(|e| {
            CovstatError::config_with_source(format!("Invalid dashboard URL '{}'", config.url), e)
        })?;
        let client = http_client(config.timeout_seconds, &config.user_agent)?;
        Ok(Self { client, url })
    }

    /// The page this fetcher requests.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the page body as text.
    pub fn fetch_body(&self) -> Result<String> {
        info!(url = %self.url, "fetching dashboard");
        let response = self.client.get(self.url.clone()).send()?;
        check_status(response.status(), &self.url)?;

        let body = response.text()?;
        debug!(bytes = body.len(), "received dashboard body");
        Ok(body)
    }

    /// Fetch the page and parse it into a document tree.
    pub fn fetch(&self) -> Result<Html> {
        let body = self.fetch_body()?;
        Ok(parse_document(&body))
    }
}
