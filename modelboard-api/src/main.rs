use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use modelboard_api::admin::AdminRegistry;
use modelboard_api::config::ApiConfig;
use modelboard_api::feed::ModelFeed;
use modelboard_api::helpers::{logging::init_tracing, upstream::create_model_source};
use modelboard_api::poller::Poller;
use modelboard_api::routes;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "modelboard-api", version, about = "Model listing dashboard API")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_path) = match args.config {
        Some(path) => (ApiConfig::load_from(&path)?, path),
        None => ApiConfig::load()?,
    };

    let log_directory = config.logging.as_ref().and_then(|l| l.directory.clone());
    let _log_guard = init_tracing(log_directory.as_deref())?;
    info!(path = %config_path.display(), "Loaded configuration");

    let source = create_model_source(&config.upstream)?;
    let feed = ModelFeed::new();
    let registry = AdminRegistry::with_simulated_defaults();

    let _poller = if config.poller.enabled {
        let interval = Duration::from_secs(config.poller.interval_secs);
        Some(Poller::new(source.clone(), feed.clone(), interval).spawn())
    } else {
        info!("Upstream poller disabled, /api/dashboard will stay empty");
        None
    };

    let allowed_origins = config
        .cors
        .as_ref()
        .map(|cors| cors.allowed_origins.clone())
        .unwrap_or_default();

    let bind_addr = config.bind_addr();
    info!("Starting modelboard-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(source.clone()))
            .app_data(web::Data::new(feed.clone()))
            .app_data(web::Data::new(registry.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
