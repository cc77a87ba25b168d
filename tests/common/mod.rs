#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use docsapp::config::Config;
use docsapp::routes::create_app_routes;
use docsapp::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub const GROUPS: [&str; 5] = ["g1", "g2", "g3", "g4", "g5"];

/// Fresh state and router over groups g1..g5.
pub fn test_app() -> (AppState, Router) {
    let config = Config {
        group_ids: GROUPS.iter().map(|g| g.to_string()).collect(),
        ..Config::default()
    };
    let state = AppState::new(config).unwrap();
    (state.clone(), create_app_routes(state))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn join_request(body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/join")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn form_join_request(body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/join")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `name=value` part of the Set-Cookie header, ready for a Cookie header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_string())
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Join `group` with a new session and return its cookie.
pub async fn join_as(app: &Router, group: &str) -> String {
    let body = format!(r#"{{"groupId":"{}"}}"#, group);
    let response = send(app, join_request(&body, None)).await;
    assert_eq!(response.status(), 200);
    session_cookie(&response).expect("join should start a session")
}
