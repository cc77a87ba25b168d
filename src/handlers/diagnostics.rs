use axum::{extract::State, Json};
use tracing::info;

use crate::models::DiagnosticsResponse;
use crate::AppState;

/// Connection, session and board counters
pub async fn diagnostics(State(app_state): State<AppState>) -> Json<DiagnosticsResponse> {
    let n_conn = app_state.hub.connection_count() as u32;
    let n_sessions = app_state.sessions.session_count() as u32;
    let n_groups = app_state.registry.len() as u32;
    let n_non_empty = app_state.hub.non_empty_fragments().await as u32;

    info!(
        "Diagnostics: Conn: {}, Sessions: {}, Groups: {} ({} non-empty)",
        n_conn, n_sessions, n_groups, n_non_empty
    );

    Json(DiagnosticsResponse {
        n_conn,
        n_sessions,
        n_groups,
        n_non_empty,
    })
}
