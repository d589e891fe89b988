//! Raw listing types as the upstream sends them
//!
//! The upstream shape is not under our control, so every field decodes
//! leniently: a missing, null or wrongly-typed value becomes "no value"
//! instead of failing the whole listing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top-level body of the listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamListing {
    #[serde(default, deserialize_with = "lenient::entries")]
    pub models: Vec<RawModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawModel {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub display_name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub model_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub context_window: Option<u64>,
    #[serde(default, deserialize_with = "lenient::tags")]
    pub features: Vec<String>,
    #[serde(
        rename = "proxy_providers",
        default,
        deserialize_with = "lenient::entries"
    )]
    pub providers: Vec<RawProvider>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProvider {
    #[serde(default, deserialize_with = "lenient::text")]
    pub prefix: Option<String>,
    #[serde(default, deserialize_with = "lenient::tags")]
    pub features: Vec<String>,
    #[serde(
        rename = "performance_metrics",
        default,
        deserialize_with = "lenient::object"
    )]
    pub performance: PerformanceMetrics,
}

/// Performance block of a provider, kept as the raw strings the upstream sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub uptime_percentage: Option<String>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub latency: Option<String>,
}

mod lenient {
    use super::*;
    use serde::de::DeserializeOwned;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(text(deserializer)?.unwrap_or_default())
    }

    /// Strings pass through, numbers are rendered, everything else is dropped
    pub fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Array of objects; entries that are not objects are skipped
    pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => T::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_models_is_empty() {
        let listing: UpstreamListing = serde_json::from_value(json!({})).unwrap();
        assert!(listing.models.is_empty());

        let listing: UpstreamListing = serde_json::from_value(json!({ "models": null })).unwrap();
        assert!(listing.models.is_empty());
    }

    #[test]
    fn test_full_model_decodes() {
        let listing: UpstreamListing = serde_json::from_value(json!({
            "models": [{
                "name": "gpt-4o-mini",
                "display_name": "GPT-4o Mini",
                "type": "chat/completion",
                "context_window": 128000,
                "features": ["vision", "function_calling"],
                "proxy_providers": [{
                    "prefix": "provider-3",
                    "features": ["reasoning"],
                    "performance_metrics": {
                        "uptime_percentage": "99.2",
                        "latency": "0.84s"
                    }
                }]
            }]
        }))
        .unwrap();

        let model = &listing.models[0];
        assert_eq!(model.name, "gpt-4o-mini");
        assert_eq!(model.display_name.as_deref(), Some("GPT-4o Mini"));
        assert_eq!(model.model_type.as_deref(), Some("chat/completion"));
        assert_eq!(model.context_window, Some(128000));
        assert_eq!(model.features, vec!["vision", "function_calling"]);
        let provider = &model.providers[0];
        assert_eq!(provider.prefix.as_deref(), Some("provider-3"));
        assert_eq!(provider.performance.uptime_percentage.as_deref(), Some("99.2"));
        assert_eq!(provider.performance.latency.as_deref(), Some("0.84s"));
    }

    #[test]
    fn test_malformed_fields_degrade_to_no_value() {
        let listing: UpstreamListing = serde_json::from_value(json!({
            "models": [
                "not-an-object",
                {
                    "name": "bge-m3",
                    "type": 7,
                    "context_window": "unknown",
                    "features": ["vision", 3, null],
                    "proxy_providers": [
                        42,
                        { "prefix": "provider-1", "performance_metrics": "N/A" },
                        { "prefix": "provider-2", "performance_metrics": { "uptime_percentage": 97.5, "latency": [] } }
                    ]
                }
            ]
        }))
        .unwrap();

        assert_eq!(listing.models.len(), 1);
        let model = &listing.models[0];
        assert_eq!(model.model_type, None);
        assert_eq!(model.context_window, None);
        assert_eq!(model.features, vec!["vision"]);
        assert_eq!(model.providers.len(), 2);
        assert_eq!(model.providers[0].performance, PerformanceMetrics::default());
        assert_eq!(
            model.providers[1].performance.uptime_percentage.as_deref(),
            Some("97.5")
        );
        assert_eq!(model.providers[1].performance.latency, None);
    }
}
