//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to verify status codes and the
//! errors they return.

mod planet;
mod user;

use holocron_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
