pub mod character;
pub mod health;
pub mod post;
pub mod scene;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                     list (?userId=), create
/// /characters/{id}                get, update, delete
///
/// /scenes                         list, create
/// /scenes/{id}                    get, update, delete
/// /scenes/{id}/posts              list posts
///
/// /posts                          create
///
/// /health                         health check (also served at the root)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", character::router())
        .nest("/scenes", scene::router())
        .nest("/posts", post::router())
        .merge(health::router())
}
