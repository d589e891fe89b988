use modelboard_upstream::{ListingClient, ModelSource};
use std::sync::Arc;
use tracing::info;

use crate::config::UpstreamConfig;

pub fn create_model_source(config: &UpstreamConfig) -> anyhow::Result<Arc<dyn ModelSource>> {
    let client = ListingClient::new(config.listing_url.clone())?;
    info!(url = %client.listing_url(), "Using upstream model listing");

    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_source_from_default_config() {
        let source = create_model_source(&UpstreamConfig::default()).unwrap();
        assert!(source.source_name().contains("get-display-models"));
    }

    #[test]
    fn test_empty_listing_url_is_rejected() {
        let config = UpstreamConfig {
            listing_url: String::new(),
        };
        assert!(create_model_source(&config).is_err());
    }
}
