//! Audit log collections
//!
//! Entries live in `data/audit_entries.json` and snapshots in
//! `data/audit_snapshots.json`. Nothing in the crate updates or deletes
//! records in either collection.

use crate::audit::{AuditLogEntry, AuditLogSnapshot};
use crate::models::{AuditLogEntryId, SnapshotId};

use super::repository::{Record, Repository};

impl Record for AuditLogEntry {
    type Id = AuditLogEntryId;
    const ENTITY_TYPE: &'static str = "Audit log entry";

    fn id(&self) -> AuditLogEntryId {
        self.id
    }

    fn set_id(&mut self, id: AuditLogEntryId) {
        self.id = id;
    }
}

impl Record for AuditLogSnapshot {
    type Id = SnapshotId;
    const ENTITY_TYPE: &'static str = "Audit log snapshot";

    fn id(&self) -> SnapshotId {
        self.id
    }

    fn set_id(&mut self, id: SnapshotId) {
        self.id = id;
    }
}

/// Repository for audit log entries
pub type AuditEntryRepository = Repository<AuditLogEntry>;

/// Repository for audit log snapshots
pub type SnapshotRepository = Repository<AuditLogSnapshot>;
