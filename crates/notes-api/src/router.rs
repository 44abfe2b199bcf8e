use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{auth, health, messages};
use crate::middleware::require_session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Public routes (no session)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout));

    // Protected routes (session gate). route_layer keeps unknown paths 404.
    let protected_routes = Router::new()
        .route("/api/me", get(auth::me))
        .route(
            "/api/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/api/messages/{id}", put(messages::update_message))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        // Spans carry method and URI only; headers are not recorded.
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// Allows a single cross-origin frontend to call the API with credentials.
pub fn with_cors(router: Router, origin: &str) -> Result<Router, axum::http::header::InvalidHeaderValue> {
    let origin = origin.trim().parse::<HeaderValue>()?;
    Ok(router.layer(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]),
    ))
}
