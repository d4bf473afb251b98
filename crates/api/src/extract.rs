//! Extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies; these
//! wrappers keep every error response in the `{ "error": ... }` shape.

use axum::extract::{FromRequest, FromRequestParts};
use roleplay_core::types::DbId;

use crate::error::{AppError, AppResult};

/// JSON body extractor. Malformed or non-JSON bodies become 400 `BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor. Rejections become 400 `BAD_REQUEST`.
///
/// Id segments are taken as `String` and read with [`parse_id`], so a
/// malformed id is a lookup miss rather than a bad request.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Read an id path segment.
///
/// A segment that is not an `i64` cannot match any row, so it is reported
/// as 404 for `entity`, the same as a well-formed id with no row behind it.
pub fn parse_id(entity: &'static str, raw: &str) -> AppResult<DbId> {
    raw.parse().map_err(|_| AppError::NotFound {
        entity,
        id: raw.to_string(),
    })
}
