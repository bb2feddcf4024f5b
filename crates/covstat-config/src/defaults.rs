//! Default values matching the published dashboard and API.

use crate::schema::*;

/// Dashboard page holding the autumn term statistics table.
pub const DEFAULT_DASHBOARD_URL: &str =
    "https://www.sheffield.ac.uk/autumn-term-2020/covid-19-statistics/";

/// UK coronavirus statistics API.
pub const DEFAULT_STATS_ENDPOINT: &str = "https://api.coronavirus.data.gov.uk/v1/data";

/// Timeout shared by the dashboard fetch and the statistics query.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DASHBOARD_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: concat!("covstat/", env!("CARGO_PKG_VERSION")).to_string(),
            day_first: false,
        }
    }
}

impl Default for StatsApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_STATS_ENDPOINT.to_string(),
            area_type: "utla".to_string(),
            area_name: "sheffield".to_string(),
            latest_by: "newCasesByPublishDate".to_string(),
            structure: serde_json::json!({
                "date": "date",
                "cases": {
                    "daily": "newCasesByPublishDate",
                    "cumulative": "cumCasesByPublishDate"
                }
            }),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            width: 1600,
            height: 1000,
            staff_color: "#1f77b4".to_string(),
            student_color: "#ff7f0e".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
