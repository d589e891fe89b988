#![allow(dead_code)]

use actix_web::{test, web, App};
use modelboard_api::admin::AdminRegistry;
use modelboard_api::feed::ModelFeed;
use modelboard_api::routes;
use modelboard_upstream::{ModelSource, PerformanceMetrics, RawModel, RawProvider, UpstreamError};
use std::sync::{Arc, Mutex};

/// What the mock upstream answers with
#[derive(Clone)]
pub enum MockOutcome {
    Models(Vec<RawModel>),
    Status(u16),
    Malformed,
}

pub struct MockModelSource {
    pub outcome: Arc<Mutex<MockOutcome>>,
    pub call_count: Arc<Mutex<usize>>,
}

impl MockModelSource {
    pub fn new(outcome: MockOutcome) -> Self {
        MockModelSource {
            outcome: Arc::new(Mutex::new(outcome)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn set_outcome(&self, outcome: MockOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl ModelSource for MockModelSource {
    async fn fetch_models(&self) -> Result<Vec<RawModel>, UpstreamError> {
        *self.call_count.lock().unwrap() += 1;

        match self.outcome.lock().unwrap().clone() {
            MockOutcome::Models(models) => Ok(models),
            MockOutcome::Status(status) => Err(UpstreamError::status(status, "upstream failure")),
            MockOutcome::Malformed => {
                let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
                Err(UpstreamError::from(err))
            }
        }
    }

    fn source_name(&self) -> &str {
        "mock"
    }
}

pub fn provider(prefix: &str, uptime: &str, latency: &str, features: &[&str]) -> RawProvider {
    RawProvider {
        prefix: Some(prefix.to_string()),
        features: features.iter().map(|f| f.to_string()).collect(),
        performance: PerformanceMetrics {
            uptime_percentage: Some(uptime.to_string()),
            latency: Some(latency.to_string()),
        },
    }
}

pub fn raw_model(name: &str, model_type: &str, providers: Vec<RawProvider>) -> RawModel {
    RawModel {
        name: name.to_string(),
        display_name: None,
        model_type: Some(model_type.to_string()),
        context_window: Some(128_000),
        features: Vec::new(),
        providers,
    }
}

/// A small listing covering every category
pub fn sample_listing() -> Vec<RawModel> {
    vec![
        raw_model(
            "gpt-4o-mini",
            "chat/completion",
            vec![
                provider("provider-1", "99.5", "0.80s", &["function_calling"]),
                provider("provider-3", "97.0", "0.35s", &["vision"]),
            ],
        ),
        raw_model(
            "llama-3.1-8b",
            "chat/completion",
            vec![provider("provider-2", "N/A", "0.20s", &[])],
        ),
        raw_model(
            "text-embedding-3-small",
            "embeddings",
            vec![
                provider("provider-1", "98.0", "0.50s", &[]),
                provider("provider-6", "99.9", "0.90s", &[]),
            ],
        ),
        raw_model(
            "bge-m3",
            "embeddings",
            vec![provider("provider-2", "99.9", "0.30s", &[])],
        ),
        raw_model(
            "whisper-1",
            "audio/transcriptions",
            vec![provider("provider-4", "95.0", "1.20s", &["audio"])],
        ),
        raw_model(
            "flux-schnell",
            "images/generations",
            vec![provider("provider-5", "90.0", "3.00s", &[])],
        ),
    ]
}

pub struct TestApp<S> {
    pub source: Arc<MockModelSource>,
    pub feed: ModelFeed,
    pub app: S,
}

pub async fn setup_test_app(
    outcome: MockOutcome,
) -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let source = Arc::new(MockModelSource::new(outcome));
    let model_source = source.clone() as Arc<dyn ModelSource>;
    let feed = ModelFeed::new();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(model_source))
            .app_data(web::Data::new(feed.clone()))
            .app_data(web::Data::new(AdminRegistry::with_simulated_defaults()))
            .configure(routes::configure),
    )
    .await;

    TestApp { source, feed, app }
}
