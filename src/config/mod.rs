//! Configuration module for the sitebuild pipeline
//!
//! Provides types and parsing for `sitebuild.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::{default_config, find_config, find_config_from, load_config, ConfigError};
pub use schema::*;
