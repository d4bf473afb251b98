//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use roleplay_core::character::AgeInput;
use roleplay_core::types::DbId;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: DbId,
    pub name: String,
    /// Never empty; blank input is stored as the placeholder portrait.
    pub portrait: String,
    pub age: Option<i64>,
    pub description: Option<String>,
    pub bio: Option<String>,
    pub user_id: String,
}

/// DTO for creating a new character.
///
/// `name` and `user_id` default to empty so that a missing field reaches
/// validation instead of failing deserialization. `age` accepts form text
/// as well as numbers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacter {
    #[serde(default)]
    pub name: String,
    pub portrait: Option<String>,
    #[serde(default)]
    pub age: AgeInput,
    pub description: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub user_id: String,
}

/// DTO for updating a character. Updates replace every column, so the body
/// has the same shape as a create.
pub type UpdateCharacter = CreateCharacter;
