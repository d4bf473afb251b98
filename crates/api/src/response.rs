//! Shared response bodies for write endpoints.
//!
//! Writes answer with a small acknowledgement instead of the full record,
//! which the clients re-fetch when they need it.

use roleplay_core::types::DbId;
use serde::Serialize;

/// `{ "id": n }` returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: DbId,
}

/// `{ "changes": n }` returned by update endpoints.
#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub changes: u64,
}

/// `{ "deleted": n }` returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}
