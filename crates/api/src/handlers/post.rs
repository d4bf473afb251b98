//! Handlers for the `/posts` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roleplay_core::post::validate_post;
use roleplay_db::models::post::{CreatePost, NewPost, PostWithCharacter};
use roleplay_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/posts
///
/// Stamps the post with the current time and returns it with the author's
/// name and portrait.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePost>,
) -> AppResult<(StatusCode, Json<PostWithCharacter>)> {
    let (scene_id, character_id) =
        validate_post(input.scene_id, input.character_id, &input.content)?;

    let new_post = NewPost {
        scene_id,
        character_id,
        content: input.content,
        timestamp: chrono::Utc::now(),
    };
    let post = PostRepo::create(&state.pool, &new_post).await?;
    tracing::info!(id = post.id, scene_id, character_id, "Post created");
    Ok((StatusCode::CREATED, Json(post)))
}
