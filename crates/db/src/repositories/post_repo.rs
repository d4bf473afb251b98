//! Repository for the `posts` table.
//!
//! Posts are always read joined with `characters` so callers get the
//! author's current name and portrait.

use roleplay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::post::{NewPost, PostWithCharacter};

/// Column list for post reads, including the joined character fields.
const COLUMNS: &str = "p.id, p.scene_id, p.character_id, p.content, p.timestamp, \
    c.name AS character_name, c.portrait AS character_portrait";

/// Provides create and read operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a post and return it enriched with character info.
    ///
    /// Fails with a foreign-key violation if the scene or character does not
    /// exist.
    pub async fn create(pool: &SqlitePool, input: &NewPost) -> Result<PostWithCharacter, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO posts (scene_id, character_id, content, timestamp)
             VALUES (?, ?, ?, ?)
             RETURNING id",
        )
        .bind(input.scene_id)
        .bind(input.character_id)
        .bind(&input.content)
        .bind(input.timestamp)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a single post by ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PostWithCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM posts p
             JOIN characters c ON c.id = p.character_id
             WHERE p.id = ?"
        );
        sqlx::query_as::<_, PostWithCharacter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the posts of a scene in chronological order.
    ///
    /// Ties on `timestamp` fall back to insertion order. An unknown scene
    /// yields an empty list.
    pub async fn list_for_scene(
        pool: &SqlitePool,
        scene_id: DbId,
    ) -> Result<Vec<PostWithCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM posts p
             JOIN characters c ON c.id = p.character_id
             WHERE p.scene_id = ?
             ORDER BY p.timestamp ASC, p.id ASC"
        );
        sqlx::query_as::<_, PostWithCharacter>(&query)
            .bind(scene_id)
            .fetch_all(pool)
            .await
    }
}
