use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod dashboard;
pub mod model;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use dashboard::{
    AdminActionResponse, CapabilityCounts, DashboardResponse, ModelsResponse, SortField,
    SortOrder,
};
pub use model::{Capabilities, Capability, ModelCategory, NormalizedModel};

// Shared models for the modelboard api and dashboard

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
