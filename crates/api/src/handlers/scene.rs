//! Handlers for the `/scenes` resource and its posts sub-resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roleplay_core::error::CoreError;
use roleplay_core::scene::validate_title;
use roleplay_core::types::DbId;
use roleplay_db::models::post::PostWithCharacter;
use roleplay_db::models::scene::{CreateScene, SceneWithCharacters, UpdateScene};
use roleplay_db::repositories::{PostRepo, SceneRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, AppJson, AppPath};
use crate::response::{ChangesResponse, DeletedResponse, IdResponse};
use crate::state::AppState;

const ENTITY: &str = "Scene";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /api/scenes
///
/// Most recently created first, each with its `characterIds`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SceneWithCharacters>>> {
    let scenes = SceneRepo::list_with_characters(&state.pool).await?;
    tracing::debug!(count = scenes.len(), "Listed scenes");
    Ok(Json(scenes))
}

/// GET /api/scenes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<SceneWithCharacters>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let scene = SceneRepo::find_by_id_with_characters(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(scene))
}

/// POST /api/scenes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateScene>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    validate_title(&input.title)?;

    let scene = SceneRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = scene.id,
        characters = input.character_ids.len(),
        "Scene created"
    );
    Ok((StatusCode::CREATED, Json(IdResponse { id: scene.id })))
}

/// PUT /api/scenes/{id}
///
/// Replaces title, location, description and the full character set.
pub async fn update(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
    AppJson(input): AppJson<UpdateScene>,
) -> AppResult<Json<ChangesResponse>> {
    validate_title(&input.title)?;
    let id = parse_id(ENTITY, &raw_id)?;

    SceneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, characters = input.character_ids.len(), "Scene updated");
    Ok(Json(ChangesResponse { changes: 1 }))
}

/// DELETE /api/scenes/{id}
///
/// Also removes the scene's character associations and posts.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<DeletedResponse>> {
    let id = parse_id(ENTITY, &raw_id)?;
    if SceneRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Scene deleted");
        Ok(Json(DeletedResponse { deleted: 1 }))
    } else {
        Err(not_found(id))
    }
}

/// GET /api/scenes/{id}/posts
///
/// Oldest first. An unknown scene, including an id that is not a number,
/// yields an empty list.
pub async fn list_posts(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<Vec<PostWithCharacter>>> {
    let Ok(id) = raw_id.parse::<DbId>() else {
        return Ok(Json(Vec::new()));
    };
    let posts = PostRepo::list_for_scene(&state.pool, id).await?;
    tracing::debug!(scene_id = id, count = posts.len(), "Listed posts");
    Ok(Json(posts))
}
