//! Configuration module for logpuzzle.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, FetchConfig, OptionsConfig};
pub use validation::validate_config;
