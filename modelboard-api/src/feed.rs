//! Latest normalized listing shared between the poller and the dashboard
//!
//! Every poll takes a [`PollTicket`] before it fetches. Results are applied
//! only when their ticket is newer than the last applied one, so a slow
//! response can never overwrite a newer listing.

use chrono::{DateTime, Utc};
use shared_types::NormalizedModel;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollTicket {
    sequence: u64,
}

impl PollTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The poll failed; models were left as they were
    Failed,
    /// A newer poll already landed; the result was discarded
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub models: Arc<Vec<NormalizedModel>>,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    /// Sequence of the poll the models came from, 0 before the first success
    pub sequence: u64,
}

#[derive(Default)]
struct FeedState {
    models: Arc<Vec<NormalizedModel>>,
    last_updated: Option<DateTime<Utc>>,
    last_error: Option<String>,
    applied_sequence: u64,
}

#[derive(Clone, Default)]
pub struct ModelFeed {
    state: Arc<RwLock<FeedState>>,
    issued: Arc<AtomicU64>,
}

impl ModelFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_poll(&self) -> PollTicket {
        PollTicket {
            sequence: self.issued.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    pub fn apply(
        &self,
        ticket: PollTicket,
        result: Result<Vec<NormalizedModel>, String>,
    ) -> ApplyOutcome {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if ticket.sequence <= state.applied_sequence {
            debug!(
                sequence = ticket.sequence,
                applied = state.applied_sequence,
                "Discarding out-of-order poll result"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(models) => {
                debug!(sequence = ticket.sequence, models = models.len(), "Applied poll result");
                state.models = Arc::new(models);
                state.last_updated = Some(Utc::now());
                state.last_error = None;
                state.applied_sequence = ticket.sequence;
                ApplyOutcome::Applied
            }
            Err(error) => {
                warn!(sequence = ticket.sequence, error = %error, "Poll failed, keeping previous models");
                state.last_error = Some(error);
                ApplyOutcome::Failed
            }
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        FeedSnapshot {
            models: Arc::clone(&state.models),
            last_updated: state.last_updated,
            last_error: state.last_error.clone(),
            sequence: state.applied_sequence,
        }
    }
}
