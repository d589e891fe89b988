//! Normalization and ranking of the raw model listing
//!
//! Each raw model is paired with one of its providers, picked by a
//! [`SelectionStrategy`], and flattened into a [`NormalizedModel`]. The pass
//! is pure: it never fails on malformed entries and the same input always
//! yields the same output.

use std::cmp::Ordering;
use std::collections::HashSet;

use shared_types::{Capabilities, NormalizedModel};

use crate::metrics::{parse_latency, parse_uptime, round_to, LATENCY_SENTINEL};
use crate::types::{RawModel, RawProvider};

pub const FEATURE_FUNCTION_CALLING: &str = "function_calling";
pub const FEATURE_VISION: &str = "vision";
pub const FEATURE_AUDIO: &str = "audio";
pub const FEATURE_REASONING: &str = "reasoning";
pub const FEATURE_HYBRID_REASONING: &str = "hybrid-reasoning";

/// Prefix used in the provider id when a model lists no usable provider
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// How the provider backing a model is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Highest uptime wins, lowest latency breaks ties. Providers without a
    /// positive uptime are ignored and models left without any are dropped.
    /// The output is ranked by uptime, then latency.
    BestUptimeThenLatency,
    /// Lowest reported latency wins, falling back to the first listed
    /// provider. Models are never dropped and upstream order is kept.
    #[default]
    FastestLatencyWithFallback,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    strategy: SelectionStrategy,
}

struct Selection<'a> {
    provider: Option<&'a RawProvider>,
    uptime: Option<f64>,
    latency: Option<f64>,
}

impl Normalizer {
    pub fn new(strategy: SelectionStrategy) -> Self {
        Self { strategy }
    }

    /// Normalizer used for the embeddings listing
    pub fn best_performance() -> Self {
        Self::new(SelectionStrategy::BestUptimeThenLatency)
    }

    /// Normalizer used for the general listing
    pub fn fastest() -> Self {
        Self::new(SelectionStrategy::FastestLatencyWithFallback)
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    pub fn normalize(&self, models: &[RawModel]) -> Vec<NormalizedModel> {
        match self.strategy {
            SelectionStrategy::BestUptimeThenLatency => {
                let mut normalized: Vec<NormalizedModel> = models
                    .iter()
                    .filter_map(|model| {
                        select_best_performance(&model.providers)
                            .map(|selection| build(model, selection))
                    })
                    .map(|mut model| {
                        model.uptime = model.uptime.map(|u| round_to(u, 1));
                        model.latency = model.latency.map(|l| round_to(l, 2));
                        model
                    })
                    .collect();
                rank(&mut normalized);
                normalized
            }
            SelectionStrategy::FastestLatencyWithFallback => models
                .iter()
                .map(|model| build(model, select_fastest(&model.providers)))
                .collect(),
        }
    }
}

fn select_best_performance(providers: &[RawProvider]) -> Option<Selection<'_>> {
    let mut best: Option<(&RawProvider, f64, f64)> = None;

    for provider in providers {
        let uptime = match provider
            .performance
            .uptime_percentage
            .as_deref()
            .and_then(parse_uptime)
        {
            Some(uptime) if uptime > 0.0 => uptime,
            _ => continue,
        };
        let latency = provider
            .performance
            .latency
            .as_deref()
            .and_then(parse_latency)
            .unwrap_or(LATENCY_SENTINEL);

        let better = match best {
            None => true,
            Some((_, best_uptime, best_latency)) => {
                uptime > best_uptime || (uptime == best_uptime && latency < best_latency)
            }
        };
        if better {
            best = Some((provider, uptime, latency));
        }
    }

    best.map(|(provider, uptime, _)| Selection {
        provider: Some(provider),
        uptime: Some(uptime),
        latency: provider.performance.latency.as_deref().and_then(parse_latency),
    })
}

fn select_fastest(providers: &[RawProvider]) -> Selection<'_> {
    let mut chosen = providers.first();
    let mut fastest = chosen.and_then(provider_latency);

    for provider in providers {
        if let Some(latency) = provider_latency(provider) {
            if fastest.map_or(true, |current| latency < current) {
                chosen = Some(provider);
                fastest = Some(latency);
            }
        }
    }

    Selection {
        provider: chosen,
        uptime: chosen.and_then(|p| {
            p.performance
                .uptime_percentage
                .as_deref()
                .and_then(parse_uptime)
        }),
        latency: fastest,
    }
}

fn provider_latency(provider: &RawProvider) -> Option<f64> {
    provider.performance.latency.as_deref().and_then(parse_latency)
}

fn build(model: &RawModel, selection: Selection<'_>) -> NormalizedModel {
    let prefix = selection
        .provider
        .and_then(|p| p.prefix.as_deref())
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(UNKNOWN_PROVIDER);

    let provider_features = selection
        .provider
        .map(|p| p.features.as_slice())
        .unwrap_or_default();

    let description = model
        .display_name
        .as_deref()
        .filter(|display| !display.trim().is_empty())
        .unwrap_or(model.name.as_str())
        .to_string();

    NormalizedModel {
        name: model.name.clone(),
        description,
        provider_id: format!("{}/{}", prefix, model.name),
        model_type: model.model_type.clone(),
        capabilities: merge_capabilities(&model.features, provider_features),
        context_window: model.context_window,
        latency: selection.latency,
        uptime: selection.uptime,
    }
}

/// Capability flags from the union of model and provider feature tags
pub fn merge_capabilities(model_features: &[String], provider_features: &[String]) -> Capabilities {
    let merged: HashSet<&str> = model_features
        .iter()
        .chain(provider_features)
        .map(String::as_str)
        .collect();

    Capabilities {
        function_calling: merged.contains(FEATURE_FUNCTION_CALLING),
        vision: merged.contains(FEATURE_VISION),
        audio: merged.contains(FEATURE_AUDIO),
        reasoning: merged.contains(FEATURE_REASONING)
            || merged.contains(FEATURE_HYBRID_REASONING),
    }
}

/// Uptime descending, then latency ascending with missing latency last
fn rank(models: &mut [NormalizedModel]) {
    models.sort_by(|a, b| {
        let uptime_a = a.uptime.unwrap_or(0.0);
        let uptime_b = b.uptime.unwrap_or(0.0);
        match uptime_b.total_cmp(&uptime_a) {
            Ordering::Equal => {
                let latency_a = a.latency.unwrap_or(LATENCY_SENTINEL);
                let latency_b = b.latency.unwrap_or(LATENCY_SENTINEL);
                latency_a.total_cmp(&latency_b)
            }
            other => other,
        }
    });
}
