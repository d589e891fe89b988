use thiserror::Error;

/// Errors raised while fetching the upstream model listing
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status
    #[error("Upstream API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Network or connection error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Listing body was not valid JSON or not a listing object
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Generic error for unexpected cases
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UpstreamError {
    /// Create a status error
    pub fn status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Upstream HTTP status, when the failure came with one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { source } => source.status().map(|s| s.as_u16()),
            Self::Parse { .. } | Self::Internal { .. } => None,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
