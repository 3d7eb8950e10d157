//! User collection
//!
//! Stored in `data/users.json`.

use crate::models::{User, UserId};

use super::repository::{Record, Repository};

impl Record for User {
    type Id = UserId;
    const ENTITY_TYPE: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }

    fn set_id(&mut self, id: UserId) {
        self.id = id;
    }
}

/// Repository for user persistence
pub type UserRepository = Repository<User>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, UserRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = UserRepository::new(temp_dir.path().join("users.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn user(forename: &str, is_active: bool) -> User {
        User::new(
            forename,
            "Tester",
            format!("{}@example.com", forename.to_lowercase()),
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            is_active,
        )
    }

    #[test]
    fn test_create_and_filter_by_active() {
        let (_temp_dir, repo) = create_test_repo();
        repo.create(user("Ann", true)).unwrap();
        repo.create(user("Bob", false)).unwrap();

        let active = repo.query(|u| u.is_active).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].forename, "Ann");
        assert_eq!(active[0].id, UserId::from(1));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let stored = repo.create(user("Cleo", true)).unwrap();

        let repo2 = UserRepository::new(temp_dir.path().join("users.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(stored.id).unwrap(), Some(stored));
    }
}
