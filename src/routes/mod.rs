pub mod fallback;
pub mod form;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn intake_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(form::index).fallback(fallback::fallback))
        .route("/index.html", get(form::index).fallback(fallback::fallback))
        .route("/submit", post(submit::submit).fallback(fallback::fallback))
        .fallback(fallback::fallback)
}
