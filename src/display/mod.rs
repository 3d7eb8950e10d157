//! Display formatting for terminal output
//!
//! Renders users and audit log entries as plain-text tables and detail
//! views.

pub mod audit;
pub mod user;

pub use audit::{format_entry_details, format_entry_list};
pub use user::{format_user_details, format_user_list};
