//! Shared test harness for Holocron.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a
//! test needs, then `build()` returns a [`TestContext`] backed by an in-memory SQLite
//! database with fixture helpers for inserting more records during the test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
