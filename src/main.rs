use actix_web::{middleware, web, App, HttpServer};
use convert_host::config::AppConfig;
use convert_host::routes::AppState;
use convert_host::services::BlobFetcher;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,convert_host=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().unwrap_or_default();
    info!("Starting convert-host server...");
    info!(
        "Server config: {}:{}",
        config.server.host, config.server.port
    );
    info!("Blob store base URL: {}", config.blob.base_url);

    // Build the blob fetcher once; its connection pool is shared
    let fetcher = BlobFetcher::new(&config.blob).expect("Failed to build blob fetcher");

    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create app state
    let app_state = web::Data::new(AppState { config, fetcher });

    // Start HTTP server
    info!("Starting HTTP server on {}:{}", server_host, server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(convert_host::routes::convert::configure)
            .configure(convert_host::routes::health::configure)
    })
    .bind((server_host.as_str(), server_port))?
    .run()
    .await
}
