use crate::models::{ErrorResponse, GrantPermissionsRequest, SessionResponse};
use crate::routes::matches::AppState;
use crate::services::host::{HostMessage, APP_ID};
use crate::services::SessionError;
use actix_web::{web, HttpResponse, Responder};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::get().to(get_session))
        .route("/session/permissions", web::post().to(grant_permissions))
        .route("/session/permissions/deny", web::post().to(deny_permissions))
        .route("/host/message", web::post().to(host_message));
}

async fn session_snapshot(state: &AppState) -> SessionResponse {
    SessionResponse {
        app_id: APP_ID,
        session_id: state.session.id(),
        granted: state.session.granted().await,
        ready: state.session.is_ready(),
        active_tab: state.session.active_tab().await,
    }
}

/// Session snapshot endpoint
///
/// GET /api/v1/session
async fn get_session(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(session_snapshot(&state).await)
}

/// Permission grant endpoint
///
/// POST /api/v1/session/permissions
///
/// All four required permissions must be granted together; a partial set is
/// rejected and nothing changes.
async fn grant_permissions(
    state: web::Data<AppState>,
    req: web::Json<GrantPermissionsRequest>,
) -> impl Responder {
    match state
        .session
        .grant(req.permissions.clone(), &state.bridge)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(session_snapshot(&state).await),
        Err(SessionError::MissingPermissions(missing)) => {
            tracing::info!("permission grant rejected, missing {:?}", missing);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing required permissions".to_string(),
                message: format!("all required permissions must be granted: missing {:?}", missing),
                status_code: 400,
            })
        }
    }
}

/// Permission denial endpoint
///
/// POST /api/v1/session/permissions/deny
async fn deny_permissions(state: web::Data<AppState>) -> impl Responder {
    state.session.deny(&state.bridge).await;
    HttpResponse::Ok().json(session_snapshot(&state).await)
}

/// Inbound host-frame message endpoint
///
/// POST /api/v1/host/message
///
/// Accepts raw host messages; unknown types are acknowledged and ignored
/// rather than rejected, matching how a frame listener behaves.
async fn host_message(state: web::Data<AppState>, body: web::Json<serde_json::Value>) -> impl Responder {
    match serde_json::from_value::<HostMessage>(body.into_inner()) {
        Ok(message) => {
            state.session.handle_inbound(message).await;
            HttpResponse::Ok().json(serde_json::json!({ "handled": true }))
        }
        Err(e) => {
            tracing::debug!("ignoring unrecognized host message: {}", e);
            HttpResponse::Ok().json(serde_json::json!({ "handled": false }))
        }
    }
}
