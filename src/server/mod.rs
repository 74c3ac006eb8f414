//! Server application core modules.
//!
//! This module contains all server-side functionality for Holocron: HTTP routing and
//! controllers, services, database repositories, error handling, configuration and
//! startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
