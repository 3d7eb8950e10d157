//! Configuration module for the user admin application
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence

pub mod paths;
pub mod settings;

pub use paths::AdminPaths;
pub use settings::Settings;
