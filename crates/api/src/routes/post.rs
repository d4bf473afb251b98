use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(handlers::post::create))
}
