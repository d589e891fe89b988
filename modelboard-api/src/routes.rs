use actix_web::web;

use crate::handlers::{admin, dashboard, health, listings};

/// Register every API route along with the top-level path aliases
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health::health_check))
        .route("/api/models", web::get().to(listings::list_models))
        .route("/api/dashboard", web::get().to(dashboard::get_dashboard))
        .service(
            web::resource(["/api/embedding", "/embeddings"])
                .route(web::get().to(listings::list_embeddings)),
        )
        .service(
            web::resource(["/api/chat", "/chat"]).route(web::get().to(listings::list_chat_models)),
        )
        .service(
            web::resource(["/api/audio", "/audio"])
                .route(web::get().to(listings::list_audio_models)),
        )
        .service(
            web::resource(["/api/image", "/image"])
                .route(web::get().to(listings::list_image_models)),
        )
        .service(
            web::resource("/api/admin/{action}")
                .route(web::post().to(admin::run_admin_action))
                .default_service(web::to(admin::admin_method_not_allowed)),
        );
}
