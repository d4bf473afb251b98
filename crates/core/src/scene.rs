//! Scene field rules and character association normalisation.

use crate::error::CoreError;
use crate::types::DbId;

/// Validate a scene title: it must contain something other than whitespace.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".to_string()));
    }
    Ok(())
}

/// Collapse a submitted list of character ids into the association set.
///
/// The result is sorted ascending with duplicates removed, so that
/// `[3, 1, 3]` and `[1, 3]` describe the same scene membership.
pub fn normalize_character_ids(ids: &[DbId]) -> Vec<DbId> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}
