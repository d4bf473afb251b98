//! Post field rules.

use crate::error::CoreError;
use crate::types::DbId;

/// Check that a post names its scene and character and carries content.
///
/// Returns the unwrapped `(scene_id, character_id)` pair on success.
pub fn validate_post(
    scene_id: Option<DbId>,
    character_id: Option<DbId>,
    content: &str,
) -> Result<(DbId, DbId), CoreError> {
    match (scene_id, character_id) {
        (Some(scene_id), Some(character_id)) if !content.trim().is_empty() => {
            Ok((scene_id, character_id))
        }
        _ => Err(CoreError::Validation(
            "Scene ID, character ID, and content are required".to_string(),
        )),
    }
}
