use actix_web::{web, HttpResponse};
use tracing::info;

use crate::admin::AdminRegistry;
use crate::error::{ApiError, ApiResult};

/// `POST /api/admin/{action}`
pub async fn run_admin_action(
    action: web::Path<String>,
    registry: web::Data<AdminRegistry>,
) -> ApiResult<HttpResponse> {
    let action = action.into_inner();
    info!(action = %action, "Running admin action");

    let response = registry.run(&action).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Any other method on the admin route
pub async fn admin_method_not_allowed() -> ApiResult<HttpResponse> {
    Err(ApiError::MethodNotAllowed { allow: "POST" })
}
