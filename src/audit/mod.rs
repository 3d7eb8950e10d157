//! Audit logging system for the user admin application
//!
//! Records every create, update and delete of a user as an append-only log
//! entry with before/after snapshots of the user's fields.
//!
//! # Architecture
//!
//! - `AuditLogEntry`: one recorded action, with the timestamp, the affected
//!   user id and references to its snapshots.
//! - `AuditLogSnapshot`: an immutable copy of a user's fields.
//! - `AuditLogService`: writes entries on behalf of the user service and
//!   answers queries over the log.
//! - `snapshot_changes`: field-level diff between two snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use user_admin::audit::{AuditAction, AuditLogService};
//! use user_admin::clock::SystemClock;
//!
//! let audit = AuditLogService::new(&storage, &SystemClock);
//! audit.log_create(&user)?;
//!
//! for entry in audit.filter_by_user_id(user.id)? {
//!     println!("{} {}: {}", entry.time, entry.action, entry.message);
//! }
//! ```

mod diff;
mod entry;
mod service;

pub use diff::{snapshot_changes, FieldChange};
pub use entry::{AuditAction, AuditLogEntry, AuditLogEntryDetails, AuditLogSnapshot};
pub use service::AuditLogService;
