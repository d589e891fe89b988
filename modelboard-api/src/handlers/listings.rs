use actix_web::{web, HttpResponse};
use modelboard_upstream::{ModelSource, Normalizer};
use shared_types::{ModelCategory, ModelsResponse};
use std::sync::Arc;
use tracing::{error, info};

use super::listing_cache_header;
use crate::dashboard::category_listing;
use crate::error::ApiResult;

/// `GET /api/models`: every model, paired with its fastest provider
pub async fn list_models(source: web::Data<Arc<dyn ModelSource>>) -> ApiResult<HttpResponse> {
    let raw = source.fetch_models().await.map_err(|e| {
        error!(error = %e, "Failed to fetch upstream listing");
        e
    })?;

    let models = Normalizer::fastest().normalize(&raw);
    info!(models = models.len(), "Serving model listing");

    Ok(HttpResponse::Ok()
        .insert_header(listing_cache_header())
        .json(ModelsResponse { models }))
}

/// `GET /api/embedding`: embedding models ranked by their best provider
pub async fn list_embeddings(source: web::Data<Arc<dyn ModelSource>>) -> ApiResult<HttpResponse> {
    let raw = source.fetch_models().await.map_err(|e| {
        error!(error = %e, "Failed to fetch upstream listing");
        e
    })?;

    let embeddings: Vec<_> = raw
        .into_iter()
        .filter(|model| ModelCategory::Embeddings.matches(model.model_type.as_deref()))
        .collect();
    let models = Normalizer::best_performance().normalize(&embeddings);
    info!(models = models.len(), "Serving embedding listing");

    Ok(HttpResponse::Ok()
        .insert_header(listing_cache_header())
        .json(models))
}

async fn list_category(
    category: ModelCategory,
    source: &dyn ModelSource,
) -> ApiResult<HttpResponse> {
    let raw = source.fetch_models().await.map_err(|e| {
        error!(error = %e, category = category.slug(), "Failed to fetch upstream listing");
        e
    })?;

    let models = category_listing(category, &Normalizer::fastest().normalize(&raw));
    info!(models = models.len(), category = category.slug(), "Serving category listing");

    Ok(HttpResponse::Ok()
        .insert_header(listing_cache_header())
        .json(ModelsResponse { models }))
}

/// `GET /api/chat`
pub async fn list_chat_models(source: web::Data<Arc<dyn ModelSource>>) -> ApiResult<HttpResponse> {
    list_category(ModelCategory::Chat, source.get_ref().as_ref()).await
}

/// `GET /api/audio`
pub async fn list_audio_models(
    source: web::Data<Arc<dyn ModelSource>>,
) -> ApiResult<HttpResponse> {
    list_category(ModelCategory::Audio, source.get_ref().as_ref()).await
}

/// `GET /api/image`
pub async fn list_image_models(
    source: web::Data<Arc<dyn ModelSource>>,
) -> ApiResult<HttpResponse> {
    list_category(ModelCategory::Images, source.get_ref().as_ref()).await
}
