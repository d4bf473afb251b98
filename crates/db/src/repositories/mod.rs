//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod character_repo;
pub mod post_repo;
pub mod scene_repo;

pub use character_repo::CharacterRepo;
pub use post_repo::PostRepo;
pub use scene_repo::SceneRepo;
