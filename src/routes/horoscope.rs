use crate::core::horoscope::{daily_love_tip, decan, love_forecast, lucky_colors, recommended_bio};
use crate::core::zodiac::classify;
use crate::models::{
    DailyHoroscopeResponse, ErrorResponse, HoroscopeRequest, SuggestRequest, SuggestResponse,
};
use crate::routes::matches::AppState;
use crate::services::host::HostMessage;
use crate::services::{CacheKey, DirectoryError};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/horoscope/daily", web::post().to(daily))
        .route("/horoscope/suggest", web::post().to(suggest));
}

/// Daily horoscope endpoint
///
/// POST /api/v1/horoscope/daily
///
/// Request body:
/// ```json
/// {
///   "birthDate": "1995-07-23",
///   "date": "2024-03-14"
/// }
/// ```
///
/// `date` defaults to today. The reading is deterministic per
/// (sign, decan, date), so it is served from cache after the first request
/// of the day for that decan.
async fn daily(state: web::Data<AppState>, req: web::Json<HoroscopeRequest>) -> impl Responder {
    let sign = classify(req.birth_date);
    let user_decan = decan(req.birth_date);
    let date = req.date.unwrap_or_else(|| chrono::Utc::now().date_naive());

    let key = CacheKey::horoscope(sign, user_decan, date);
    if let Ok(cached) = state.cache.get::<serde_json::Value>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    let response = DailyHoroscopeResponse {
        sign,
        glyph: sign.glyph(),
        date,
        decan: user_decan,
        love_tip: daily_love_tip(sign, date),
        lucky_colors: lucky_colors(sign, date),
        forecast: love_forecast(sign, req.birth_date),
        recommended_bio: recommended_bio(sign),
    };

    match serde_json::to_value(&response) {
        Ok(value) => {
            if let Err(e) = state.cache.set(&key, &value).await {
                tracing::warn!("failed to cache horoscope for {}: {}", key, e);
            }
            HttpResponse::Ok().json(value)
        }
        Err(e) => {
            tracing::error!("failed to serialize horoscope: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Serialization failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Suggest endpoint
///
/// POST /api/v1/horoscope/suggest
///
/// Posts SUGGEST_ZODIAC_USERS for the user's sign and switches the session
/// to the search tab with that sign preselected.
async fn suggest(state: web::Data<AppState>, req: web::Json<SuggestRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user = match state.directory.get_profile(&req.user_id).await {
        Ok(profile) => profile,
        Err(DirectoryError::NotFound(id)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: format!("no profile with id {}", id),
                status_code: 404,
            });
        }
    };

    let sign = user.sign();
    state.bridge.post(HostMessage::SuggestZodiacUsers { sign });
    state
        .session
        .handle_inbound(HostMessage::SuggestZodiacUsers { sign })
        .await;

    HttpResponse::Ok().json(SuggestResponse {
        sign,
        active_tab: state.session.active_tab().await,
    })
}
