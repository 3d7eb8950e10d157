//! Storage initialization
//!
//! Handles first-run setup and the demo user set.

use chrono::NaiveDate;

use crate::clock::ClockProvider;
use crate::config::paths::AdminPaths;
use crate::error::{AdminError, AdminResult};
use crate::models::User;
use crate::services::UserService;

use super::Storage;

/// forename, surname, email, (year, month, day), active
const DEMO_USERS: [(&str, &str, &str, (i32, u32, u32), bool); 11] = [
    ("Peter", "Loew", "ploew@example.com", (1990, 6, 24), true),
    ("Benjamin Franklin", "Gates", "bfgates@example.com", (1960, 4, 4), true),
    ("Castor", "Troy", "ctroy@example.com", (1986, 2, 15), false),
    ("Memphis", "Raines", "mraines@example.com", (1997, 11, 21), true),
    ("Stanley", "Goodspeed", "sgodspeed@example.com", (1973, 6, 15), true),
    ("H.I.", "McDunnough", "himcdunnough@example.com", (1978, 10, 17), true),
    ("Cameron", "Poe", "cpoe@example.com", (1995, 3, 23), false),
    ("Edward", "Malus", "emalus@example.com", (1955, 11, 5), false),
    ("Damon", "Macready", "dmacready@example.com", (1963, 12, 25), false),
    ("Johnny", "Blaze", "jblaze@example.com", (1994, 5, 21), true),
    ("Robin", "Feld", "rfeld@example.com", (1985, 10, 25), true),
];

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &AdminPaths) -> AdminResult<()> {
    paths.ensure_directories()
}

/// Seed the demo users, each with its Create audit entry
///
/// Only seeds a store that has neither users nor audit history. Returns the
/// number of users created.
pub fn seed_demo_users(storage: &Storage, clock: &dyn ClockProvider) -> AdminResult<usize> {
    if storage.users.count()? > 0 || storage.audit_entries.count()? > 0 {
        tracing::debug!("store already has data, skipping demo users");
        return Ok(0);
    }

    let service = UserService::new(storage, clock);
    for (forename, surname, email, (year, month, day), is_active) in DEMO_USERS {
        let date_of_birth = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AdminError::Config(format!("Invalid demo date {}-{}-{}", year, month, day))
        })?;
        service.create_user(User::new(forename, surname, email, date_of_birth, is_active))?;
    }

    tracing::info!(count = DEMO_USERS.len(), "seeded demo users");
    Ok(DEMO_USERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditAction;
    use crate::clock::SystemClock;
    use crate::models::UserId;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_seed_creates_users_with_history() {
        let (_temp_dir, storage) = create_test_storage();

        let seeded = seed_demo_users(&storage, &SystemClock).unwrap();

        assert_eq!(seeded, 11);
        assert_eq!(storage.users.count().unwrap(), 11);
        assert_eq!(storage.users.query(|u| u.is_active).unwrap().len(), 7);

        let entries = storage.audit_entries.get_all().unwrap();
        assert_eq!(entries.len(), 11);
        assert!(entries.iter().all(|e| e.action == AuditAction::Create));
        assert_eq!(entries[0].user_id, UserId::from(1));
        assert_eq!(entries[0].message, "User created with ID '1'");
    }

    #[test]
    fn test_seed_skips_existing_data() {
        let (_temp_dir, storage) = create_test_storage();

        seed_demo_users(&storage, &SystemClock).unwrap();
        let again = seed_demo_users(&storage, &SystemClock).unwrap();

        assert_eq!(again, 0);
        assert_eq!(storage.users.count().unwrap(), 11);
    }

    #[test]
    fn test_seed_skips_when_only_history_remains() {
        let (_temp_dir, storage) = create_test_storage();
        seed_demo_users(&storage, &SystemClock).unwrap();

        let service = UserService::new(&storage, &SystemClock);
        for user in service.get_all().unwrap() {
            service.delete_user(&user).unwrap();
        }

        assert_eq!(seed_demo_users(&storage, &SystemClock).unwrap(), 0);
        assert_eq!(storage.users.count().unwrap(), 0);
    }
}
