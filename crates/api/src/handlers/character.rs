//! Handlers for the `/characters` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use roleplay_core::character::validate_character;
use roleplay_core::error::CoreError;
use roleplay_core::types::DbId;
use roleplay_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use roleplay_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{parse_id, AppJson, AppPath};
use crate::query::CharacterListParams;
use crate::response::{ChangesResponse, DeletedResponse, IdResponse};
use crate::state::AppState;

const ENTITY: &str = "Character";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY,
        id,
    })
}

/// GET /api/characters?userId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CharacterListParams>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool, params.user_filter()).await?;
    tracing::debug!(count = characters.len(), "Listed characters");
    Ok(Json(characters))
}

/// GET /api/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<Character>> {
    let id = parse_id(ENTITY, &raw_id)?;
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(character))
}

/// POST /api/characters
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCharacter>,
) -> AppResult<(StatusCode, Json<IdResponse>)> {
    validate_character(&input.name, &input.user_id, &input.age)?;

    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(id = character.id, user_id = %character.user_id, "Character created");
    Ok((StatusCode::CREATED, Json(IdResponse { id: character.id })))
}

/// PUT /api/characters/{id}
///
/// Replaces every field of the character.
pub async fn update(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
    AppJson(input): AppJson<UpdateCharacter>,
) -> AppResult<Json<ChangesResponse>> {
    validate_character(&input.name, &input.user_id, &input.age)?;
    let id = parse_id(ENTITY, &raw_id)?;

    CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Character updated");
    Ok(Json(ChangesResponse { changes: 1 }))
}

/// DELETE /api/characters/{id}
///
/// Also removes the character's scene memberships and posts.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(raw_id): AppPath<String>,
) -> AppResult<Json<DeletedResponse>> {
    let id = parse_id(ENTITY, &raw_id)?;
    if CharacterRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Character deleted");
        Ok(Json(DeletedResponse { deleted: 1 }))
    } else {
        Err(not_found(id))
    }
}
