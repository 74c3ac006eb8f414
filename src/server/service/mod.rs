//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the repositories. They turn missing
//! records into not-found errors, resolve the display names inlined into favorites and map
//! database models into the DTOs returned by the API.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
