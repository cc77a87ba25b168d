use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use cookie::{Cookie, SameSite};
use tracing::{debug, error};

use crate::ws::sessionctx::{SessionBinder, SessionId};

/// Resolve the session cookie (or start a session) and expose the
/// `SessionId` to handlers as a request extension.
pub async fn session_middleware(
    State(sessions): State<SessionBinder>,
    mut req: Request,
    next: Next,
) -> Response {
    let presented = get_session_cookie(req.headers(), sessions.cookie_name());
    let (session, fresh) = sessions.open(presented);
    if fresh {
        debug!("Started session {}", session);
    }

    req.extensions_mut().insert(session);
    let mut response = next.run(req).await;

    if fresh {
        let cookie = Cookie::build((sessions.cookie_name().to_string(), session.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => error!("Failed to encode session cookie: {}", e),
        }
    }
    response
}

/// Get the session id from the request cookies, if one is present and well formed
pub fn get_session_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|c| c.name() == cookie_name)
        .and_then(|c| SessionId::parse(c.value()))
}
