//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input through `roleplay_core`, delegate to the
//! corresponding repository in `roleplay_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod character;
pub mod post;
pub mod scene;
