use actix_web::{web, HttpResponse};
use shared_types::DashboardResponse;

use crate::dashboard::{capability_counts, render};
use crate::error::ApiResult;
use crate::feed::ModelFeed;
use crate::models::DashboardQuery;

/// `GET /api/dashboard`: the dashboard table for the requested tab, filters
/// and sort, rendered from the most recent poll
pub async fn get_dashboard(
    query: web::Query<DashboardQuery>,
    feed: web::Data<ModelFeed>,
) -> ApiResult<HttpResponse> {
    let state = query.to_state()?;
    let snapshot = feed.snapshot();

    let models = render(&state, &snapshot.models);

    Ok(HttpResponse::Ok().json(DashboardResponse {
        tab: state.tab(),
        total: models.len(),
        counts: capability_counts(&models),
        models,
        last_updated: snapshot.last_updated,
        last_error: snapshot.last_error,
    }))
}
