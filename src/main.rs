mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::routes::matches::AppState;
use crate::services::{
    CacheKey, ContentCache, EngagementFeed, HostBridge, LeaderboardFeed, MockDirectory,
    MockEngagementFeed, MockLeaderboardFeed, Session,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .json(serde_json::json!({
                "error": self.error,
                "message": self.message,
                "status_code": self.status_code,
            }))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Poll both feeds and replace the cached snapshots wholesale.
async fn refresh_snapshots(
    cache: &ContentCache,
    engagement: &dyn EngagementFeed,
    leaderboard: &dyn LeaderboardFeed,
) {
    match engagement.engaged_profiles().await {
        Ok(profiles) => {
            if let Err(e) = cache.set(&CacheKey::engagement(), &profiles).await {
                warn!("failed to refresh engagement snapshot: {}", e);
            }
        }
        Err(e) => warn!("engagement feed poll failed: {}", e),
    }

    match leaderboard.top_entries().await {
        Ok(entries) => {
            let snapshot = (entries, chrono::Utc::now());
            if let Err(e) = cache.set(&CacheKey::leaderboard(), &snapshot).await {
                warn!("failed to refresh leaderboard snapshot: {}", e);
            }
        }
        Err(e) => warn!("leaderboard feed poll failed: {}", e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting SignSync Algo service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Mock data sources with configured artificial latency
    let latency = settings.sources.latency_ms;
    let directory = Arc::new(MockDirectory::new(latency));
    let engagement = Arc::new(MockEngagementFeed::new(latency));
    let leaderboard = Arc::new(MockLeaderboardFeed::new(latency));

    info!("Data sources initialized ({}ms simulated latency)", latency);

    let cache = Arc::new(ContentCache::new(
        settings.cache.max_entries,
        settings.cache.ttl_secs,
    ));

    info!(
        "Content cache initialized ({} entries, TTL {}s)",
        settings.cache.max_entries, settings.cache.ttl_secs
    );

    let bridge = Arc::new(HostBridge::default());
    let session = Arc::new(Session::new());

    // Build application state
    let app_state = AppState {
        directory,
        engagement: engagement.clone(),
        leaderboard: leaderboard.clone(),
        cache: cache.clone(),
        bridge,
        session,
    };

    // Background snapshot refresh; dropped with the process at shutdown
    let refresh_secs = settings.sources.refresh_secs;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(refresh_secs));
        loop {
            ticker.tick().await;
            refresh_snapshots(&cache, engagement.as_ref(), leaderboard.as_ref()).await;
        }
    });

    info!("Snapshot refresh task started (every {}s)", refresh_secs);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
