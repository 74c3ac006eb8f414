//! Serializable request & response types for the HTTP API.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
