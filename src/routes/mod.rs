//! Route table for the users API
//!
//! The full router is assembled once at startup from explicit route
//! definitions; nothing registers itself.

mod user;

use axum::{http::HeaderValue, http::Method, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::handlers::{health_check, root};
use crate::middleware;
use crate::state::AppState;

pub use user::user_routes;

/// Build the application router: operational endpoints at the root, user
/// routes under the configured base path.
pub fn app_router(state: AppState, config: &Config) -> Router {
    let api = if config.api_base_path.is_empty() {
        Router::new().merge(user_routes())
    } else {
        Router::new().nest(&config.api_base_path, user_routes())
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(api)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_tracing))
                .layer(configure_cors(config.cors_allowed_origins.as_deref())),
        )
}

/// Any origin unless an explicit comma-separated allow list is configured
pub fn configure_cors(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                s.parse().ok()
            }
        })
        .collect();

    if origins.is_empty() {
        tracing::debug!("No CORS origin allow list configured, allowing all origins");
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
