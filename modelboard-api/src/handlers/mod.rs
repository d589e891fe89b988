pub mod admin;
pub mod dashboard;
pub mod health;
pub mod listings;

use actix_web::http::header;

/// Cache hint sent with every listing response
pub const LISTING_CACHE_CONTROL: &str = "public, s-maxage=30, stale-while-revalidate=60";

pub(crate) fn listing_cache_header() -> (header::HeaderName, &'static str) {
    (header::CACHE_CONTROL, LISTING_CACHE_CONTROL)
}
