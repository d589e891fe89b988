use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Capability flags a model can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Capability {
    FunctionCalling,
    Vision,
    Audio,
    Reasoning,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::FunctionCalling,
        Capability::Vision,
        Capability::Audio,
        Capability::Reasoning,
    ];

    /// Key used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::FunctionCalling => "function_calling",
            Capability::Vision => "vision",
            Capability::Audio => "audio",
            Capability::Reasoning => "reasoning",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Capability::FunctionCalling => "Function Calling",
            Capability::Vision => "Vision",
            Capability::Audio => "Audio",
            Capability::Reasoning => "Reasoning",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == key.trim())
    }
}

/// Four-flag capability summary of a normalized model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Capabilities {
    pub function_calling: bool,
    pub vision: bool,
    pub audio: bool,
    pub reasoning: bool,
}

impl Capabilities {
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::FunctionCalling => self.function_calling,
            Capability::Vision => self.vision,
            Capability::Audio => self.audio,
            Capability::Reasoning => self.reasoning,
        }
    }
}

/// Display-ready record for one model and its chosen provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedModel {
    pub name: String,
    /// Upstream display name, or the model name when the upstream has none
    pub description: String,
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    pub capabilities: Capabilities,
    #[ts(type = "number | null")]
    pub context_window: Option<u64>,
    /// Latency of the chosen provider, in the unit the upstream reports (seconds)
    pub latency: Option<f64>,
    /// Uptime percentage of the chosen provider
    pub uptime: Option<f64>,
}

/// Model categories exposed as dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ModelCategory {
    #[serde(rename = "chat")]
    Chat,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "embed")]
    Embeddings,
    #[serde(rename = "images")]
    Images,
}

impl ModelCategory {
    pub const ALL: [ModelCategory; 4] = [
        ModelCategory::Chat,
        ModelCategory::Audio,
        ModelCategory::Embeddings,
        ModelCategory::Images,
    ];

    /// The `type` tag the upstream listing uses for this category
    pub fn type_tag(&self) -> &'static str {
        match self {
            ModelCategory::Chat => "chat/completion",
            ModelCategory::Audio => "audio/transcriptions",
            ModelCategory::Embeddings => "embeddings",
            ModelCategory::Images => "images/generations",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ModelCategory::Chat => "chat",
            ModelCategory::Audio => "audio",
            ModelCategory::Embeddings => "embed",
            ModelCategory::Images => "images",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelCategory::Chat => "Chat & Completion",
            ModelCategory::Audio => "Audio & Transcriptions",
            ModelCategory::Embeddings => "Embeddings",
            ModelCategory::Images => "Image Generation",
        }
    }

    /// Accepts tab keys as well as the path aliases (`embedding`, `image`, ...)
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "chat" => Some(ModelCategory::Chat),
            "audio" => Some(ModelCategory::Audio),
            "embed" | "embedding" | "embeddings" => Some(ModelCategory::Embeddings),
            "images" | "image" => Some(ModelCategory::Images),
            _ => None,
        }
    }

    pub fn matches(&self, model_type: Option<&str>) -> bool {
        model_type == Some(self.type_tag())
    }
}
