use modelboard_upstream::{ModelSource, Normalizer};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::feed::{ApplyOutcome, ModelFeed};

/// Refreshes a [`ModelFeed`] from the upstream on a fixed interval
#[derive(Clone)]
pub struct Poller {
    source: Arc<dyn ModelSource>,
    feed: ModelFeed,
    normalizer: Normalizer,
    interval: Duration,
}

impl Poller {
    pub fn new(source: Arc<dyn ModelSource>, feed: ModelFeed, interval: Duration) -> Self {
        Self {
            source,
            feed,
            normalizer: Normalizer::fastest(),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One fetch, normalized and applied through the feed's sequence guard
    pub async fn poll_once(&self) -> ApplyOutcome {
        let ticket = self.feed.begin_poll();

        let result = self
            .source
            .fetch_models()
            .await
            .map(|raw| self.normalizer.normalize(&raw))
            .map_err(|e| {
                error!(error = %e, source = %self.source.source_name(), "Failed to poll upstream listing");
                e.to_string()
            });

        self.feed.apply(ticket, result)
    }

    /// Start ticking. Each tick fires its own poll without waiting for the
    /// previous one; late results are dropped by the feed.
    pub fn spawn(self) -> JoinHandle<()> {
        info!(
            interval_secs = self.interval.as_secs(),
            source = %self.source.source_name(),
            "Starting upstream poller"
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let poller = self.clone();
                tokio::spawn(async move {
                    poller.poll_once().await;
                });
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use modelboard_upstream::{RawModel, UpstreamError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ModelSource for CountingSource {
        async fn fetch_models(&self) -> Result<Vec<RawModel>, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(UpstreamError::status(503, "Service Unavailable"));
            }
            Ok(vec![RawModel {
                name: "gpt-4o-mini".to_string(),
                model_type: Some("chat/completion".to_string()),
                ..RawModel::default()
            }])
        }

        fn source_name(&self) -> &str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_poll_once_applies_normalized_models() {
        let feed = ModelFeed::new();
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let poller = Poller::new(source.clone(), feed.clone(), Duration::from_secs(60));

        assert_eq!(poller.poll_once().await, ApplyOutcome::Applied);

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.models.len(), 1);
        assert_eq!(snapshot.models[0].provider_id, "unknown/gpt-4o-mini");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_poll_once_records_failure() {
        let feed = ModelFeed::new();
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let poller = Poller::new(source, feed.clone(), Duration::from_secs(60));

        assert_eq!(poller.poll_once().await, ApplyOutcome::Failed);
        let snapshot = feed.snapshot();
        assert!(snapshot.models.is_empty());
        assert!(snapshot.last_error.unwrap().contains("503"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_poller_ticks_on_interval() {
        let feed = ModelFeed::new();
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail: false,
        });
        let handle = Poller::new(source.clone(), feed.clone(), Duration::from_secs(60)).spawn();

        tokio::time::sleep(Duration::from_secs(125)).await;
        handle.abort();

        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert!(feed.snapshot().sequence >= 1);
    }
}
