//! User model
//!
//! The administered user record. Field validation lives in
//! `services::validation`; the model itself accepts any values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,

    pub forename: String,

    pub surname: String,

    pub email: String,

    pub date_of_birth: NaiveDate,

    /// Whether the account is active
    #[serde(default)]
    pub is_active: bool,
}

impl User {
    /// Create a new, not yet stored user
    pub fn new(
        forename: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        is_active: bool,
    ) -> Self {
        Self {
            id: UserId::UNASSIGNED,
            forename: forename.into(),
            surname: surname.into(),
            email: email.into(),
            date_of_birth,
            is_active,
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 6, 24).unwrap()
    }

    #[test]
    fn test_new_user_is_unassigned() {
        let user = User::new("Peter", "Loew", "ploew@example.com", dob(), true);
        assert!(!user.id.is_assigned());
        assert_eq!(user.full_name(), "Peter Loew");
    }

    #[test]
    fn test_display() {
        let user = User::new("Peter", "Loew", "ploew@example.com", dob(), true);
        assert_eq!(user.to_string(), "Peter Loew <ploew@example.com>");
    }

    #[test]
    fn test_serialization() {
        let user = User::new("Peter", "Loew", "ploew@example.com", dob(), false);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"date_of_birth\":\"1990-06-24\""));
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }
}
