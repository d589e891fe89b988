//! # Modelboard upstream
//!
//! Client and normalizer for the third-party model listing the dashboard is
//! built on.
//!
//! ## Example
//!
//! ```rust,no_run
//! use modelboard_upstream::{ListingClient, ModelSource, Normalizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ListingClient::with_default_url()?;
//!     let raw = client.fetch_models().await?;
//!
//!     for model in Normalizer::fastest().normalize(&raw) {
//!         println!("{} via {}", model.name, model.provider_id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod metrics;
pub mod normalizer;
pub mod types;

pub use client::{ListingClient, ModelSource, DEFAULT_LISTING_URL};
pub use error::UpstreamError;
pub use normalizer::{Normalizer, SelectionStrategy};
pub use types::{PerformanceMetrics, RawModel, RawProvider, UpstreamListing};
