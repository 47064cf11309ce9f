use crate::core::filters::search_engaged;
use crate::models::{ErrorResponse, LeaderboardEntry, Profile, SearchRequest, SearchResponse};
use crate::routes::matches::AppState;
use crate::services::CacheKey;
use actix_web::{web, HttpResponse, Responder};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::post().to(search))
        .route("/leaderboard", web::get().to(leaderboard));
}

/// Search endpoint
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "query": "maya",
///   "sign": "Leo",
///   "limit": 20
/// }
/// ```
///
/// Filters the engagement snapshot by query and optional sign, then ranks by
/// the engagement composite. An empty query matches everyone.
async fn search(state: web::Data<AppState>, req: web::Json<SearchRequest>) -> impl Responder {
    let snapshot: Vec<Profile> = match state.cache.get(&CacheKey::engagement()).await {
        Ok(cached) => cached,
        Err(_) => match state.engagement.engaged_profiles().await {
            Ok(profiles) => {
                if let Err(e) = state.cache.set(&CacheKey::engagement(), &profiles).await {
                    tracing::warn!("failed to cache engagement snapshot: {}", e);
                }
                profiles
            }
            Err(e) => {
                tracing::error!("engagement feed failed: {}", e);
                return HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Engagement feed unavailable".to_string(),
                    message: e.to_string(),
                    status_code: 500,
                });
            }
        },
    };

    let mut results = search_engaged(snapshot, &req.query, req.sign);
    results.truncate(req.limit.min(100) as usize);

    tracing::debug!(
        "search query={:?} sign={:?} -> {} results",
        req.query,
        req.sign,
        results.len()
    );

    HttpResponse::Ok().json(SearchResponse {
        count: results.len(),
        results,
    })
}

/// Leaderboard endpoint
///
/// GET /api/v1/leaderboard
///
/// Serves the cached leaderboard snapshot; falls through to the feed on a
/// cold or expired cache.
async fn leaderboard(state: web::Data<AppState>) -> impl Responder {
    type Snapshot = (Vec<LeaderboardEntry>, chrono::DateTime<chrono::Utc>);

    let (entries, last_updated): Snapshot = match state.cache.get(&CacheKey::leaderboard()).await {
        Ok(cached) => cached,
        Err(_) => {
            let entries = match state.leaderboard.top_entries().await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::error!("leaderboard feed failed: {}", e);
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Leaderboard unavailable".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            };
            let snapshot: Snapshot = (entries, chrono::Utc::now());
            if let Err(e) = state.cache.set(&CacheKey::leaderboard(), &snapshot).await {
                tracing::warn!("failed to cache leaderboard snapshot: {}", e);
            }
            snapshot
        }
    };

    HttpResponse::Ok().json(crate::models::LeaderboardResponse {
        entries: entries
            .into_iter()
            .map(crate::models::RankedEntry::from)
            .collect(),
        last_updated,
    })
}
