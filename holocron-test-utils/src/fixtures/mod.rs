//! Test fixture modules for database record creation.
//!
//! - `factory` - in-memory models with standard test values
//! - `user`, `character`, `planet` - insert records into the test database
//! - `favorite` - insert favorite rows, references are not validated

pub mod character;
pub mod factory;
pub mod favorite;
pub mod planet;
pub mod user;
