//! Holocron: a REST backend exposing users, characters, planets and user favorites.
//!
//! The [`model`] module holds the JSON-facing DTOs shared by every endpoint while
//! [`server`] contains the repositories, services, HTTP controllers and startup logic.

pub mod model;
pub mod server;
