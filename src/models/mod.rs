//! Core data models for the user admin application
//!
//! The administered `User` record and the strongly-typed identifiers shared
//! with the audit log.

pub mod ids;
pub mod user;

pub use ids::{AuditLogEntryId, SnapshotId, UserId};
pub use user::User;
