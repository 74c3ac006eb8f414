//! HTTP controller endpoints for the Holocron web API.
//!
//! Contains the Axum handlers for users, characters, planets and user favorites.
//! Controllers extract path parameters and request bodies, call into the services and wrap
//! the results in HTTP responses. Each handler carries a `utoipa::path` annotation used to
//! build the OpenAPI document.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
