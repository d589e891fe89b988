use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use modelboard_upstream::UpstreamError;
use shared_types::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Upstream API error")]
    Upstream(#[from] UpstreamError),

    #[error("Unknown admin action")]
    UnknownAdminAction(String),

    #[error("Admin action failed: {0}")]
    AdminAction(String),

    #[error("Method not allowed")]
    MethodNotAllowed { allow: &'static str },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn error_response_body(&self) -> ErrorResponse {
        match self {
            ApiError::Upstream(UpstreamError::Status { .. }) => ErrorResponse::new(self.to_string()),
            ApiError::Upstream(source) => {
                ErrorResponse::new("Server error").with_details(source.to_string())
            }
            ApiError::UnknownAdminAction(action) => {
                ErrorResponse::new(self.to_string()).with_details(format!("action: {}", action))
            }
            _ => ErrorResponse::new(self.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Upstream(source) => source
                .status_code()
                .and_then(|status| StatusCode::from_u16(status).ok())
                .filter(|status| status.is_client_error() || status.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::UnknownAdminAction(_) | ApiError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::AdminAction(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let ApiError::MethodNotAllowed { allow } = self {
            builder.insert_header((header::ALLOW, *allow));
        }
        builder.json(self.error_response_body())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
