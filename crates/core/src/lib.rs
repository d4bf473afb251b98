//! Domain types and rules shared by the database and API crates.
//!
//! Nothing here performs I/O. Repositories and handlers call into these
//! modules to validate input before any statement is issued.

pub mod character;
pub mod error;
pub mod post;
pub mod scene;
pub mod types;
