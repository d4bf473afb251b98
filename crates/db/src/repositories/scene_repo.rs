//! Repository for the `scenes` and `scene_characters` tables.

use std::collections::HashMap;

use roleplay_core::scene::normalize_character_ids;
use roleplay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::scene::{CreateScene, Scene, SceneWithCharacters, UpdateScene};

/// Column list for the `scenes` table.
const COLUMNS: &str = "id, title, location, description, created";

/// Provides CRUD operations for scenes and their character associations.
pub struct SceneRepo;

impl SceneRepo {
    /// Insert a new scene together with its character associations.
    ///
    /// The scene row and every association row are written in one
    /// transaction; if any association fails (for example an unknown
    /// character id) nothing is persisted.
    pub async fn create(pool: &SqlitePool, input: &CreateScene) -> Result<Scene, sqlx::Error> {
        let created = input.created.unwrap_or_else(chrono::Utc::now);
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO scenes (title, location, description, created)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let scene = sqlx::query_as::<_, Scene>(&insert_query)
            .bind(&input.title)
            .bind(&input.location)
            .bind(&input.description)
            .bind(created)
            .fetch_one(&mut *tx)
            .await?;

        Self::set_characters_inner(&mut tx, scene.id, &input.character_ids).await?;

        tx.commit().await?;
        tracing::debug!(
            scene_id = scene.id,
            characters = input.character_ids.len(),
            "Inserted scene"
        );
        Ok(scene)
    }

    /// Find a scene by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE id = ?");
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a scene by ID, enriched with its character ids.
    pub async fn find_by_id_with_characters(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<SceneWithCharacters>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(scene) => {
                let character_ids = Self::character_ids(pool, scene.id).await?;
                Ok(Some(SceneWithCharacters {
                    scene,
                    character_ids,
                }))
            }
            None => Ok(None),
        }
    }

    /// List all scenes, most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes ORDER BY created DESC, id DESC");
        sqlx::query_as::<_, Scene>(&query).fetch_all(pool).await
    }

    /// List all scenes with their character ids, most recently created first.
    ///
    /// Associations are loaded with a single query and grouped per scene.
    pub async fn list_with_characters(
        pool: &SqlitePool,
    ) -> Result<Vec<SceneWithCharacters>, sqlx::Error> {
        let scenes = Self::list(pool).await?;

        let pairs: Vec<(DbId, DbId)> = sqlx::query_as(
            "SELECT scene_id, character_id FROM scene_characters
             ORDER BY scene_id, character_id",
        )
        .fetch_all(pool)
        .await?;

        let mut by_scene: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for (scene_id, character_id) in pairs {
            by_scene.entry(scene_id).or_default().push(character_id);
        }

        Ok(scenes
            .into_iter()
            .map(|scene| {
                let character_ids = by_scene.remove(&scene.id).unwrap_or_default();
                SceneWithCharacters {
                    scene,
                    character_ids,
                }
            })
            .collect())
    }

    /// Update a scene and replace its character associations.
    ///
    /// Returns `None` if no row with the given `id` exists, in which case no
    /// association is touched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateScene,
    ) -> Result<Option<Scene>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE scenes SET
                title = ?,
                location = ?,
                description = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let scene = sqlx::query_as::<_, Scene>(&update_query)
            .bind(&input.title)
            .bind(&input.location)
            .bind(&input.description)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref scene) = scene {
            Self::set_characters_inner(&mut tx, scene.id, &input.character_ids).await?;
        }

        tx.commit().await?;
        Ok(scene)
    }

    /// Delete a scene by ID. Returns `true` if a row was removed.
    ///
    /// Associations and posts are removed through `ON DELETE CASCADE`.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Character association helpers
    // -----------------------------------------------------------------------

    /// Get the ids of all characters in a scene, ascending.
    pub async fn character_ids(
        pool: &SqlitePool,
        scene_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT character_id FROM scene_characters
             WHERE scene_id = ?
             ORDER BY character_id",
        )
        .bind(scene_id)
        .fetch_all(pool)
        .await
    }

    /// Replace character associations within an existing transaction.
    ///
    /// Deletes every existing pair for the scene, then inserts the new set.
    async fn set_characters_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        scene_id: DbId,
        character_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM scene_characters WHERE scene_id = ?")
            .bind(scene_id)
            .execute(&mut **tx)
            .await?;

        for character_id in normalize_character_ids(character_ids) {
            sqlx::query(
                "INSERT INTO scene_characters (scene_id, character_id)
                 VALUES (?, ?)
                 ON CONFLICT DO NOTHING",
            )
            .bind(scene_id)
            .bind(character_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
