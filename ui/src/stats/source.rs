//! HTTP access to the views endpoint.

use api::{StatPoint, ViewsQuery};
use tracing::debug;

use crate::config::WidgetConfig;
use crate::core::platform;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("no base URL for the statistics endpoint")]
    NoBaseUrl,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("statistics endpoint answered HTTP {0}")]
    Status(u16),
    #[error("response is not a statistics series: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStatsSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Configured base URL, or the page origin when none is configured.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, StatsError> {
        config
            .api_base
            .clone()
            .or_else(platform::page_origin)
            .map(Self::new)
            .ok_or(StatsError::NoBaseUrl)
    }

    pub fn url_for(&self, query: &ViewsQuery) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            query.path_and_query()
        )
    }

    pub async fn fetch_views(&self, query: &ViewsQuery) -> Result<Vec<StatPoint>, StatsError> {
        let url = self.url_for(query);
        debug!(%url, "fetching view statistics");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        decode_series(&body)
    }
}

pub fn decode_series(body: &str) -> Result<Vec<StatPoint>, StatsError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{IntervalType, ListingId};

    #[test]
    fn url_joins_base_and_query() {
        let source = HttpStatsSource::new("https://example.test/");
        let query = ViewsQuery::new(ListingId(5), IntervalType::Daily, 30);
        assert_eq!(
            source.url_for(&query),
            "https://example.test/api/stats/views?listingId=5&interval=DAILY&days=30"
        );
    }

    #[test]
    fn html_error_page_is_a_decode_error() {
        let err = decode_series("<html>Forbidden</html>").unwrap_err();
        assert!(matches!(err, StatsError::Decode(_)));
    }

    #[test]
    fn missing_base_without_browser_is_reported() {
        let config = WidgetConfig {
            api_base: None,
            ..WidgetConfig::default()
        };
        assert!(matches!(
            HttpStatsSource::from_config(&config),
            Err(StatsError::NoBaseUrl)
        ));
    }
}
