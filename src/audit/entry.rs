//! Audit entry data structures
//!
//! Defines the action types, the snapshot of a user's fields, and the
//! entry format itself.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{AuditLogEntryId, SnapshotId, User, UserId};

/// Types of actions that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// User was created
    Create,
    /// User was updated
    Update,
    /// User was deleted
    Delete,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Create => write!(f, "Create"),
            AuditAction::Update => write!(f, "Update"),
            AuditAction::Delete => write!(f, "Delete"),
        }
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(AuditAction::Create),
            "update" => Ok(AuditAction::Update),
            "delete" => Ok(AuditAction::Delete),
            other => Err(format!("unknown audit action '{}'", other)),
        }
    }
}

/// Immutable copy of a user's field values at one instant
///
/// Snapshots have their own identity; a user accumulates one per logged
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogSnapshot {
    pub id: SnapshotId,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

impl AuditLogSnapshot {
    /// Copy the field values of a user into an unsaved snapshot
    pub fn of(user: &User) -> Self {
        Self {
            id: SnapshotId::UNASSIGNED,
            forename: user.forename.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            date_of_birth: user.date_of_birth,
            is_active: user.is_active,
        }
    }

    /// Whether the snapshot holds the same field values as the user
    pub fn matches(&self, user: &User) -> bool {
        self.forename == user.forename
            && self.surname == user.surname
            && self.email == user.email
            && self.date_of_birth == user.date_of_birth
            && self.is_active == user.is_active
    }
}

/// A single audit log entry
///
/// Entries reference their snapshots by id; see `AuditLogEntryDetails` for
/// the joined form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: AuditLogEntryId,

    /// When the action occurred (UTC)
    pub time: DateTime<Utc>,

    pub action: AuditAction,

    /// The affected user; kept after the user is deleted
    pub user_id: UserId,

    /// Absent for creates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_snapshot_id: Option<SnapshotId>,

    /// Absent for deletes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_snapshot_id: Option<SnapshotId>,

    pub message: String,
}

impl AuditLogEntry {
    /// Build an unsaved entry for a user creation
    pub fn create(user_id: UserId, after: SnapshotId, time: DateTime<Utc>) -> Self {
        Self {
            id: AuditLogEntryId::UNASSIGNED,
            time,
            action: AuditAction::Create,
            user_id,
            before_snapshot_id: None,
            after_snapshot_id: Some(after),
            message: format!("User created with ID '{}'", user_id),
        }
    }

    /// Build an unsaved entry for a user update
    pub fn update(
        user_id: UserId,
        before: SnapshotId,
        after: SnapshotId,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AuditLogEntryId::UNASSIGNED,
            time,
            action: AuditAction::Update,
            user_id,
            before_snapshot_id: Some(before),
            after_snapshot_id: Some(after),
            message: format!("User updated with ID '{}'", user_id),
        }
    }

    /// Build an unsaved entry for a user deletion
    pub fn delete(user_id: UserId, before: SnapshotId, time: DateTime<Utc>) -> Self {
        Self {
            id: AuditLogEntryId::UNASSIGNED,
            time,
            action: AuditAction::Delete,
            user_id,
            before_snapshot_id: Some(before),
            after_snapshot_id: None,
            message: format!("User deleted with ID '{}'", user_id),
        }
    }

    /// Whether the snapshot references fit the action
    ///
    /// Create has only an after snapshot, Delete only a before snapshot,
    /// Update both.
    pub fn has_consistent_snapshots(&self) -> bool {
        match self.action {
            AuditAction::Create => {
                self.before_snapshot_id.is_none() && self.after_snapshot_id.is_some()
            }
            AuditAction::Update => {
                self.before_snapshot_id.is_some() && self.after_snapshot_id.is_some()
            }
            AuditAction::Delete => {
                self.before_snapshot_id.is_some() && self.after_snapshot_id.is_none()
            }
        }
    }
}

/// An entry joined with its resolved snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntryDetails {
    pub entry: AuditLogEntry,
    pub before: Option<AuditLogSnapshot>,
    pub after: Option<AuditLogSnapshot>,
}
