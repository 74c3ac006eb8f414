//! Server application models and type definitions.
//!
//! Contains the shared application state handed to every HTTP handler and type aliases for
//! the SeaORM models provided by the `entity` crate.

pub mod app;
pub mod db;
