//! Storage layer for the user admin application
//!
//! Provides JSON file storage with atomic writes. Each entity kind has its
//! own generic `Repository`; `Storage` bundles them.

pub mod audit;
pub mod file_io;
pub mod init;
pub mod repository;
pub mod users;

pub use audit::{AuditEntryRepository, SnapshotRepository};
pub use init::{initialize_storage, seed_demo_users};
pub use repository::{Record, RecordId, Repository};
pub use users::UserRepository;

use crate::config::paths::AdminPaths;
use crate::error::AdminError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: AdminPaths,
    pub users: UserRepository,
    pub audit_entries: AuditEntryRepository,
    pub audit_snapshots: SnapshotRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: AdminPaths) -> Result<Self, AdminError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            audit_entries: AuditEntryRepository::new(paths.audit_entries_file()),
            audit_snapshots: SnapshotRepository::new(paths.audit_snapshots_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AdminPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), AdminError> {
        self.users.load()?;
        self.audit_entries.load()?;
        self.audit_snapshots.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), AdminError> {
        self.users.save()?;
        self.audit_entries.save()?;
        self.audit_snapshots.save()?;
        Ok(())
    }

    /// Whether any user data has been written yet
    pub fn is_initialized(&self) -> bool {
        self.paths.users_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert_eq!(storage.users.count().unwrap(), 0);
    }

    #[test]
    fn test_save_all_marks_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.save_all().unwrap();

        assert!(storage.is_initialized());
        assert!(storage.paths().audit_entries_file().exists());
        assert!(storage.paths().audit_snapshots_file().exists());
    }
}
