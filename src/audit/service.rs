//! Audit log service
//!
//! Writes one entry, with its snapshots, per user mutation and answers
//! queries over the log. The log is append-only: this service never updates
//! or deletes entries or snapshots.

use crate::clock::ClockProvider;
use crate::error::{AdminError, AdminResult};
use crate::models::{AuditLogEntryId, SnapshotId, User, UserId};
use crate::storage::Storage;

use super::diff::{snapshot_changes, FieldChange};
use super::entry::{AuditAction, AuditLogEntry, AuditLogEntryDetails, AuditLogSnapshot};

/// Service for the user audit log
pub struct AuditLogService<'a> {
    storage: &'a Storage,
    clock: &'a dyn ClockProvider,
}

impl<'a> AuditLogService<'a> {
    /// Create a new audit log service
    pub fn new(storage: &'a Storage, clock: &'a dyn ClockProvider) -> Self {
        Self { storage, clock }
    }

    /// All entries in the order they were written
    pub fn get_all(&self) -> AdminResult<Vec<AuditLogEntry>> {
        self.storage.audit_entries.get_all()
    }

    /// Entries recording the given action
    pub fn filter_by_action(&self, action: AuditAction) -> AdminResult<Vec<AuditLogEntry>> {
        self.storage.audit_entries.query(|e| e.action == action)
    }

    /// History of one user, oldest first
    ///
    /// Includes entries for users that have since been deleted.
    pub fn filter_by_user_id(&self, user_id: UserId) -> AdminResult<Vec<AuditLogEntry>> {
        self.storage.audit_entries.query(|e| e.user_id == user_id)
    }

    /// Fetch one entry together with its before/after snapshots
    pub fn get_entry_by_id(
        &self,
        id: AuditLogEntryId,
    ) -> AdminResult<Option<AuditLogEntryDetails>> {
        let Some(entry) = self.storage.audit_entries.get(id)? else {
            return Ok(None);
        };

        let before = self.resolve_snapshot(entry.before_snapshot_id)?;
        let after = self.resolve_snapshot(entry.after_snapshot_id)?;

        Ok(Some(AuditLogEntryDetails {
            entry,
            before,
            after,
        }))
    }

    /// Field changes recorded by an entry; empty unless it has both snapshots
    pub fn changes(&self, details: &AuditLogEntryDetails) -> Vec<FieldChange> {
        match (&details.before, &details.after) {
            (Some(before), Some(after)) => snapshot_changes(before, after),
            _ => Vec::new(),
        }
    }

    /// Record the creation of a stored user
    pub fn log_create(&self, user: &User) -> AdminResult<AuditLogEntry> {
        let after = self.store_snapshot(user)?;
        let entry = AuditLogEntry::create(user.id, after, self.clock.now());
        self.append(entry)
    }

    /// Record an update of a user from `before` to `after`
    ///
    /// Both states must belong to the same user; otherwise nothing is
    /// written.
    pub fn log_update(&self, before: &User, after: &User) -> AdminResult<AuditLogEntry> {
        if before.id != after.id {
            return Err(AdminError::Audit(format!(
                "Update of user '{}' logged with a before state of user '{}'",
                after.id, before.id
            )));
        }

        let before_snapshot = self.store_snapshot(before)?;
        let after_snapshot = self.store_snapshot(after)?;
        let entry =
            AuditLogEntry::update(after.id, before_snapshot, after_snapshot, self.clock.now());
        self.append(entry)
    }

    /// Record the deletion of a user, given its last stored state
    pub fn log_delete(&self, user: &User) -> AdminResult<AuditLogEntry> {
        let before = self.store_snapshot(user)?;
        let entry = AuditLogEntry::delete(user.id, before, self.clock.now());
        self.append(entry)
    }

    fn store_snapshot(&self, user: &User) -> AdminResult<SnapshotId> {
        let snapshot = self
            .storage
            .audit_snapshots
            .create(AuditLogSnapshot::of(user))?;
        Ok(snapshot.id)
    }

    fn append(&self, entry: AuditLogEntry) -> AdminResult<AuditLogEntry> {
        if !entry.has_consistent_snapshots() {
            return Err(AdminError::Audit(format!(
                "{} entry for user '{}' has snapshots that do not fit the action",
                entry.action, entry.user_id
            )));
        }

        let entry = self.storage.audit_entries.create(entry)?;
        tracing::info!(
            entry_id = %entry.id,
            user_id = %entry.user_id,
            action = %entry.action,
            "audit entry written"
        );
        Ok(entry)
    }

    fn resolve_snapshot(&self, id: Option<SnapshotId>) -> AdminResult<Option<AuditLogSnapshot>> {
        match id {
            Some(id) => {
                let snapshot = self.storage.audit_snapshots.get(id)?;
                if snapshot.is_none() {
                    tracing::warn!(snapshot_id = %id, "audit entry references a missing snapshot");
                }
                Ok(snapshot)
            }
            None => Ok(None),
        }
    }
}
