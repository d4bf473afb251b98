//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request bodies that write it
//!
//! JSON field names are camelCase to match the browser clients.

pub mod character;
pub mod post;
pub mod scene;
