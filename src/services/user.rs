//! User service
//!
//! The single entry point for reading and mutating users. Every successful
//! create, update and delete is followed by exactly one audit log entry.
//!
//! Input is expected to be validated by the caller (see
//! `services::validation`); this service does not re-validate.

use std::str::FromStr;

use crate::audit::AuditLogService;
use crate::clock::ClockProvider;
use crate::error::{AdminError, AdminResult};
use crate::models::{User, UserId};
use crate::storage::Storage;

/// Which users a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl FromStr for UserFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(UserFilter::All),
            "active" => Ok(UserFilter::Active),
            "inactive" | "nonactive" | "non-active" => Ok(UserFilter::Inactive),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
    audit: AuditLogService<'a>,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage, clock: &'a dyn ClockProvider) -> Self {
        Self {
            storage,
            audit: AuditLogService::new(storage, clock),
        }
    }

    /// The audit log this service writes to
    pub fn audit(&self) -> &AuditLogService<'a> {
        &self.audit
    }

    pub fn get_all(&self) -> AdminResult<Vec<User>> {
        self.storage.users.get_all()
    }

    /// Users whose active flag equals `is_active`
    pub fn filter_by_active(&self, is_active: bool) -> AdminResult<Vec<User>> {
        self.storage.users.query(|u| u.is_active == is_active)
    }

    /// Users selected by a list filter
    pub fn list(&self, filter: UserFilter) -> AdminResult<Vec<User>> {
        match filter {
            UserFilter::All => self.get_all(),
            UserFilter::Active => self.filter_by_active(true),
            UserFilter::Inactive => self.filter_by_active(false),
        }
    }

    pub fn get_user_by_id(&self, id: UserId) -> AdminResult<Option<User>> {
        self.storage.users.get(id)
    }

    /// Find a user by ID or email address
    pub fn find(&self, identifier: &str) -> AdminResult<Option<User>> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<UserId>() {
            return self.get_user_by_id(id);
        }

        self.storage
            .users
            .find(|u| u.email.eq_ignore_ascii_case(identifier))
    }

    /// Store a new user and log its creation
    ///
    /// Returns the stored user with its assigned id.
    pub fn create_user(&self, user: User) -> AdminResult<User> {
        let user = self.storage.users.create(user)?;
        tracing::info!(user_id = %user.id, "user created");

        self.audit.log_create(&user)?;
        Ok(user)
    }

    /// Replace a stored user's fields and log the change
    ///
    /// Fails with `UserMissing` if no user with that id is stored, in which
    /// case nothing is written to the log.
    pub fn update_user(&self, user: User) -> AdminResult<User> {
        // Owned copy taken before the write; the update cannot reach it
        let before = self
            .storage
            .users
            .get(user.id)?
            .ok_or(AdminError::UserMissing(user.id))?;

        self.storage.users.update(user.clone()).map_err(|e| match e {
            AdminError::NotFound { .. } => AdminError::UserMissing(user.id),
            other => other,
        })?;
        tracing::info!(user_id = %user.id, "user updated");

        self.audit.log_update(&before, &user)?;
        Ok(user)
    }

    /// Remove a user and log its last stored state
    ///
    /// Fails with `UserMissing` if no user with that id is stored. The
    /// user's audit history is kept.
    pub fn delete_user(&self, user: &User) -> AdminResult<User> {
        let removed = self.storage.users.delete(user.id).map_err(|e| match e {
            AdminError::NotFound { .. } => AdminError::UserMissing(user.id),
            other => other,
        })?;
        tracing::info!(user_id = %removed.id, "user deleted");

        self.audit.log_delete(&removed)?;
        Ok(removed)
    }

    pub fn count(&self) -> AdminResult<usize> {
        self.storage.users.count()
    }
}
