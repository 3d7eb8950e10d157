//! Service layer for the user admin application
//!
//! The service layer sits on top of the storage layer: `UserService`
//! performs user mutations and writes the matching audit entries, and
//! `UserValidator` checks form input before it is submitted.

pub mod user;
pub mod validation;

pub use user::{UserFilter, UserService};
pub use validation::{UserCandidate, UserField, UserValidator, ValidationError};
