//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /characters` (`?userId=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterListParams {
    pub user_id: Option<String>,
}

impl CharacterListParams {
    /// The owner filter, treating an empty `userId=` as no filter.
    pub fn user_filter(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}
