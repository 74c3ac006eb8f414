//! Data access layer repositories.
//!
//! This module contains the database repositories for the application. Repositories wrap
//! the SeaORM queries for a single table and are generic over [`sea_orm::ConnectionTrait`]
//! so they work with both pooled connections and transactions.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
