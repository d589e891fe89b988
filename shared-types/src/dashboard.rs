use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::model::{ModelCategory, NormalizedModel};

/// Sortable dashboard columns, named after the JSON fields they sort by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SortField {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "providerId")]
    ProviderId,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "context_window")]
    ContextWindow,
    #[serde(rename = "latency")]
    Latency,
    #[serde(rename = "uptime")]
    Uptime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Number of visible models carrying each capability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapabilityCounts {
    pub function_calling: usize,
    pub vision: usize,
    pub audio: usize,
    pub reasoning: usize,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardResponse {
    pub tab: ModelCategory,
    pub models: Vec<NormalizedModel>,
    pub total: usize,
    pub counts: CapabilityCounts,
    #[ts(type = "string | null")]
    pub last_updated: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModelsResponse {
    pub models: Vec<NormalizedModel>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdminActionResponse {
    pub ok: bool,
    pub action: String,
    pub message: String,
}
