use crate::core::filters::zodiac_twins;
use crate::core::ranking::rank_by_compatibility;
use crate::models::{
    CosmicMatchesRequest, CosmicMatchesResponse, ErrorResponse, HealthResponse, TwinsResponse,
};
use crate::services::{
    ContentCache, DirectoryError, EngagementFeed, HostBridge, LeaderboardFeed, ProfileDirectory,
    Session,
};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn ProfileDirectory>,
    pub engagement: Arc<dyn EngagementFeed>,
    pub leaderboard: Arc<dyn LeaderboardFeed>,
    pub cache: Arc<ContentCache>,
    pub bridge: Arc<HostBridge>,
    pub session: Arc<Session>,
}

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/cosmic", web::post().to(cosmic_matches))
        .route("/matches/twins", web::get().to(twins));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Cosmic matches endpoint
///
/// POST /api/v1/matches/cosmic
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 20
/// }
/// ```
async fn cosmic_matches(
    state: web::Data<AppState>,
    req: web::Json<CosmicMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit at 100 to prevent oversized responses
    let limit = req.limit.min(100) as usize;

    let user = match state.directory.get_profile(&req.user_id).await {
        Ok(profile) => profile,
        Err(DirectoryError::NotFound(id)) => {
            tracing::info!("cosmic matches requested for unknown user {}", id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("no profile with id {}", id),
                status_code: 404,
            });
        }
    };

    let candidates = match state.directory.list_profiles().await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("failed to list candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let candidates: Vec<_> = candidates
        .into_iter()
        .filter(|p| p.user_id != user.user_id)
        .collect();
    let total_candidates = candidates.len();

    let user_sign = user.sign();
    let mut matches = rank_by_compatibility(user_sign, candidates);
    matches.truncate(limit);

    tracing::info!(
        "returning {} cosmic matches for {} ({})",
        matches.len(),
        req.user_id,
        user_sign
    );

    HttpResponse::Ok().json(CosmicMatchesResponse {
        user_sign,
        matches,
        total_candidates,
    })
}

/// Zodiac twins endpoint
///
/// GET /api/v1/matches/twins?userId={userId}
///
/// Returns candidates sharing the user's derived sign; defaults to the
/// signed-in user when userId is omitted.
async fn twins(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user = match query.get("userId") {
        Some(id) => state.directory.get_profile(id).await,
        None => state.directory.current_user().await,
    };

    let user = match user {
        Ok(profile) => profile,
        Err(DirectoryError::NotFound(id)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("no profile with id {}", id),
                status_code: 404,
            });
        }
    };

    let candidates = match state.directory.list_profiles().await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("failed to list candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let sign = user.sign();
    let twins = zodiac_twins(&user, candidates);

    HttpResponse::Ok().json(TwinsResponse {
        sign,
        count: twins.len(),
        twins,
    })
}
