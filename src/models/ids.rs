//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are assigned by the store; the value `0`
//! marks an entity that has not been stored yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// The placeholder ID of an entity the store has not assigned yet
            pub const UNASSIGNED: Self = Self(0);

            /// Get the underlying value
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Whether the store has assigned this ID
            pub fn is_assigned(&self) -> bool {
                self.0 != 0
            }

            /// The ID following this one
            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(UserId);
define_id!(AuditLogEntryId);
define_id!(SnapshotId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned() {
        assert!(!UserId::UNASSIGNED.is_assigned());
        assert_eq!(UserId::default(), UserId::UNASSIGNED);
        assert!(UserId::from(1).is_assigned());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId::from(12).to_string(), "12");
    }

    #[test]
    fn test_id_parse() {
        let id: AuditLogEntryId = " 7 ".parse().unwrap();
        assert_eq!(id, AuditLogEntryId::from(7));
        assert!("seven".parse::<AuditLogEntryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = SnapshotId::from(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let deserialized: SnapshotId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_next() {
        assert_eq!(UserId::UNASSIGNED.next(), UserId::from(1));
    }
}
