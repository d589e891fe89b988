use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use tracing::{debug, warn};

use crate::{
    error::UpstreamError,
    types::{RawModel, UpstreamListing},
};

/// Listing endpoint used when no other URL is configured
pub const DEFAULT_LISTING_URL: &str = "https://www.a4f.co/api/get-display-models?plan=free";

/// Anything that can produce the raw model listing
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Fetch the current listing once, without retrying
    async fn fetch_models(&self) -> Result<Vec<RawModel>, UpstreamError>;

    /// Where the listing comes from, for logs
    fn source_name(&self) -> &str;
}

/// HTTP client for the upstream listing endpoint
pub struct ListingClient {
    listing_url: String,
    http_client: reqwest::Client,
}

impl ListingClient {
    /// Create a client for the given listing URL
    pub fn new(listing_url: impl Into<String>) -> Result<Self, UpstreamError> {
        let listing_url = listing_url.into();
        if listing_url.trim().is_empty() {
            return Err(UpstreamError::internal("Listing URL cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| UpstreamError::Network { source: e })?;

        Ok(Self {
            listing_url,
            http_client,
        })
    }

    /// Client for [`DEFAULT_LISTING_URL`]
    pub fn with_default_url() -> Result<Self, UpstreamError> {
        Self::new(DEFAULT_LISTING_URL)
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    /// Fetch and decode the listing body
    pub async fn fetch_listing(&self) -> Result<UpstreamListing, UpstreamError> {
        debug!(url = %self.listing_url, "Fetching upstream model listing");

        let response = self
            .http_client
            .get(&self.listing_url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| UpstreamError::Network { source: e })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "Upstream listing request failed");
            return Err(UpstreamError::status(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Network { source: e })?;

        let listing: UpstreamListing = serde_json::from_str(&body)?;
        debug!(models = listing.models.len(), "Decoded upstream model listing");

        Ok(listing)
    }
}

#[async_trait]
impl ModelSource for ListingClient {
    async fn fetch_models(&self) -> Result<Vec<RawModel>, UpstreamError> {
        Ok(self.fetch_listing().await?.models)
    }

    fn source_name(&self) -> &str {
        &self.listing_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ListingClient::with_default_url().unwrap();
        assert_eq!(client.listing_url(), DEFAULT_LISTING_URL);
        assert!(client.listing_url().ends_with("plan=free"));
    }

    #[test]
    fn test_client_creation_empty_url() {
        assert!(ListingClient::new("  ").is_err());
    }
}
