//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod logs;
pub mod users;

pub use logs::{handle_log_command, LogCommands};
pub use users::{handle_user_command, UserCommands};
