//! Scene entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use roleplay_core::types::{DbId, Timestamp};

/// A row from the `scenes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: DbId,
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Set once at creation.
    pub created: Timestamp,
}

/// A scene together with the ids of its associated characters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneWithCharacters {
    #[serde(flatten)]
    pub scene: Scene,
    /// Sorted ascending, no duplicates.
    pub character_ids: Vec<DbId>,
}

/// DTO for creating a new scene.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScene {
    #[serde(default)]
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Defaults to the current time if omitted.
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub character_ids: Vec<DbId>,
}

/// DTO for updating a scene.
///
/// Replaces title, location and description, and the full character set.
/// `created` is not accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScene {
    #[serde(default)]
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub character_ids: Vec<DbId>,
}
