//! Client for the public coronavirus statistics API.

use crate::fetch::http_client;
use covstat_common::{CovstatError, Result};
use covstat_config::StatsApiConfig;
use reqwest::blocking::{Client, Request};
use tracing::{debug, info, warn};
use url::Url;

/// Queries the latest figures for one area.
pub struct StatsApiClient {
    client: Client,
    endpoint: Url,
    filters: String,
    structure: String,
    latest_by: String,
}

impl StatsApiClient {
    /// Creates a client. `timeout_seconds` is the same bound the dashboard
    /// fetch uses.
    pub fn new(config: &StatsApiConfig, timeout_seconds: u64, user_agent: &str) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            CovstatError::config_with_source(
                format!("Invalid statistics endpoint '{}'", config.endpoint),
                e,
            )
        })?;

        Ok(Self {
            client: http_client(timeout_seconds, user_agent)?,
            endpoint,
            filters: config.filters().join(";"),
            structure: serde_json::to_string(&config.structure)?,
            latest_by: config.latest_by.clone(),
        })
    }

    /// Query parameters in request order.
    pub fn query_params(&self) -> [(&'static str, &str); 3] {
        [
            ("filters", self.filters.as_str()),
            ("structure", self.structure.as_str()),
            ("latestBy", self.latest_by.as_str()),
        ]
    }

    /// Build the GET request without sending it.
    pub fn build_request(&self) -> Result<Request> {
        Ok(self
            .client
            .get(self.endpoint.clone())
            .query(&self.query_params())
            .build()?)
    }

    /// Fetch the latest entry and return the decoded JSON body.
    pub fn latest(&self) -> Result<serde_json::Value> {
        let request = self.build_request()?;
        info!(url = %request.url(), "querying statistics API");

        let response = self.client.execute(request)?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "statistics API request failed");
            return Err(CovstatError::network_with_status(
                format!("statistics API returned {status}: {body}"),
                status.as_u16(),
            ));
        }

        debug!(bytes = body.len(), "received statistics body");
        Ok(serde_json::from_str(&body)?)
    }
}
