pub mod api;
pub mod session_middleware;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{cors::{AllowOrigin, CorsLayer}, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::handlers::{get_state, join};
use crate::websocket::websocket_handler;
use crate::AppState;
pub use api::create_api_routes;
use session_middleware::session_middleware;

/// Build the full application router
pub fn create_app_routes(app_state: AppState) -> Router {
    // Routes that need to know who is calling
    let board_routes = Router::<AppState>::new()
        .route("/join", post(join))
        .route("/state", get(get_state))
        .route("/ws", get(websocket_handler))
        .route_layer(middleware::from_fn_with_state(
            app_state.sessions.clone(),
            session_middleware,
        ));

    let mut app_routes: Router = board_routes
        .nest("/api", create_api_routes())
        .with_state(app_state.clone())
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Serve the client from disk when configured
    if let Some(dir) = &app_state.config.public_dir {
        if Path::new(dir).is_dir() {
            info!("Serving static files from {}", dir);
            app_routes = app_routes.fallback_service(ServeDir::new(dir));
        } else {
            warn!("Public directory {} does not exist, static files disabled", dir);
        }
    }

    let origins: Vec<HeaderValue> = app_state
        .config
        .cors_origin_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    if !origins.is_empty() {
        app_routes = app_routes.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        );
    }

    app_routes.layer(TraceLayer::new_for_http())
}
