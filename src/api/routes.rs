//! API route configuration.

use crate::api::handlers::{batch_decode_handler, decode_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /links/{category}/{code}` - Decode one direct link (`?load=true` loads the target)
/// - `POST /links/decode`            - Decode a batch of direct links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links/decode", post(batch_decode_handler))
        .route("/links/{category}/{code}", get(decode_handler))
}
