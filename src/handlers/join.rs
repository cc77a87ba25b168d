use axum::{
    extract::{Extension, FromRequest, Request, State},
    http::{header, StatusCode},
    Form, Json,
};
use tracing::{info, warn};

use crate::models::{JoinRequest, JoinResponse};
use crate::ws::sessionctx::SessionId;
use crate::AppState;

/// Bind the caller's session to a group
pub async fn join(
    State(app_state): State<AppState>,
    Extension(session): Extension<SessionId>,
    request: Request,
) -> (StatusCode, Json<JoinResponse>) {
    // An unreadable body is treated like a missing group id
    let group_id = match read_join_request(request, &app_state).await {
        Ok(req) => req.group_id.unwrap_or_default(),
        Err(e) => {
            warn!("Join request for session {} has an unreadable body: {}", session, e);
            String::new()
        }
    };

    match app_state.sessions.select_group(session, &group_id) {
        Ok(group) => {
            info!("Session {} joined {}", session, group);
            (StatusCode::OK, Json(JoinResponse::accepted()))
        }
        Err(e) => {
            warn!("Session {} tried to join unknown group '{}'", session, group_id);
            (StatusCode::BAD_REQUEST, Json(JoinResponse::rejected(e)))
        }
    }
}

/// Form bodies for `application/x-www-form-urlencoded`, JSON for everything else.
async fn read_join_request(request: Request, state: &AppState) -> Result<JoinRequest, String> {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        Form::<JoinRequest>::from_request(request, state)
            .await
            .map(|Form(req)| req)
            .map_err(|e| e.body_text())
    } else {
        Json::<JoinRequest>::from_request(request, state)
            .await
            .map(|Json(req)| req)
            .map_err(|e| e.body_text())
    }
}
