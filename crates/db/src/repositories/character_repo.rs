//! Repository for the `characters` table.

use roleplay_core::character::resolve_portrait;
use roleplay_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, portrait, age, description, bio, user_id";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// A missing or blank `portrait` is stored as the placeholder portrait.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, portrait, age, description, bio, user_id)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(resolve_portrait(input.portrait.as_deref()))
            .bind(input.age.years())
            .bind(&input.description)
            .bind(&input.bio)
            .bind(&input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ?");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List characters ordered by ID, optionally only those owned by `user_id`.
    pub async fn list(
        pool: &SqlitePool,
        user_id: Option<&str>,
    ) -> Result<Vec<Character>, sqlx::Error> {
        match user_id {
            Some(user_id) => {
                let query =
                    format!("SELECT {COLUMNS} FROM characters WHERE user_id = ? ORDER BY id ASC");
                sqlx::query_as::<_, Character>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
                sqlx::query_as::<_, Character>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Replace every column of a character.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = ?,
                portrait = ?,
                age = ?,
                description = ?,
                bio = ?,
                user_id = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(resolve_portrait(input.portrait.as_deref()))
            .bind(input.age.years())
            .bind(&input.description)
            .bind(&input.bio)
            .bind(&input.user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character by ID. Returns `true` if a row was removed.
    ///
    /// Scene associations and posts written by the character go with it
    /// through `ON DELETE CASCADE`.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
