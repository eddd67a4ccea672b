pub mod config;
pub mod error;
pub mod labels;
pub mod models;
pub mod notify;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Result<Router, String> {
    let state: SharedState = Arc::new(AppState::from_config(config)?);
    Ok(build_router(state))
}

/// Attach routes and the router-wide layers to an existing state.
pub fn build_router(state: SharedState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        // Permissive CORS on every response, including errors and 404s
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(DefaultBodyLimit::max(state.config.max_body_size));

    routes::intake_routes().layer(layers).with_state(state)
}
