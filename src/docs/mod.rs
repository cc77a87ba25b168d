use utoipa::OpenApi;
use crate::board::GroupId;
use crate::models::*;

/// Join a group
#[utoipa::path(
    post,
    path = "/join",
    request_body = JoinRequest,
    responses(
        (status = 200, description = "Session bound to the group", body = JoinResponse),
        (status = 400, description = "Unknown group", body = JoinResponse)
    )
)]
#[allow(dead_code)]
pub async fn join_doc() {}

/// Current board state as seen by the caller's session
#[utoipa::path(
    get,
    path = "/state",
    responses(
        (status = 200, description = "Group assignment, fragments and combined text", body = StateResponse)
    )
)]
#[allow(dead_code)]
pub async fn state_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/api/ready",
    responses(
        (status = 200, description = "Service is ready", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

/// Diagnostics endpoint
#[utoipa::path(
    get,
    path = "/api/v1/diagnostics",
    responses(
        (status = 200, description = "Runtime counters", body = DiagnosticsResponse)
    )
)]
#[allow(dead_code)]
pub async fn diagnostics_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        join_doc,
        state_doc,
        health_check_doc,
        ready_check_doc,
        diagnostics_doc,
    ),
    components(
        schemas(
            GroupId,
            JoinRequest,
            JoinResponse,
            StateResponse,
            HealthResponse,
            DiagnosticsResponse
        )
    ),
    tags(
        (name = "board", description = "Group board endpoints")
    )
)]
pub struct ApiDoc;
