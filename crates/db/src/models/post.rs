//! Post model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use roleplay_core::types::{DbId, Timestamp};

/// A post joined with the name and portrait of the character that wrote it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCharacter {
    pub id: DbId,
    pub scene_id: DbId,
    pub character_id: DbId,
    pub content: String,
    pub timestamp: Timestamp,
    pub character_name: String,
    pub character_portrait: String,
}

/// DTO for creating a post. The timestamp is assigned by the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub scene_id: Option<DbId>,
    pub character_id: Option<DbId>,
    #[serde(default)]
    pub content: String,
}

/// A validated post ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub scene_id: DbId,
    pub character_id: DbId,
    pub content: String,
    pub timestamp: Timestamp,
}
