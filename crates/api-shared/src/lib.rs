//! # API Shared
//!
//! Shared request and response types for the menu APIs.
//!
//! Contains:
//! - JSON bodies for the REST endpoints (`types` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the CLI.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
