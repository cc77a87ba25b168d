use axum::{
    extract::{Extension, State},
    Json,
};
use tracing::debug;

use crate::models::StateResponse;
use crate::ws::sessionctx::SessionId;
use crate::AppState;

/// Current group of the caller plus every fragment and the combined text
pub async fn get_state(
    State(app_state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<StateResponse> {
    debug!("State requested by session {}", session);
    let group = app_state.sessions.current_group(session);
    Json(app_state.hub.query(group).await)
}
