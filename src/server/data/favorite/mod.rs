//! Repositories for the favorites join tables.
//!
//! Favorites are plain `(user_id, target_id)` rows; the same pair may be stored more than
//! once and rows are not removed when the referenced user or target is deleted.

pub mod character;
pub mod planet;
