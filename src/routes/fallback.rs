use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

/// Catch-all for unmatched paths and methods.
///
/// Preflight requests succeed on every path; the CORS headers themselves are
/// added by the router-wide layers.
pub async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    (StatusCode::NOT_FOUND, "Not found").into_response()
}
