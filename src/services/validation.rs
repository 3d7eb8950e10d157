//! User input validation
//!
//! Checks a bound create/edit form before it reaches the user service. Every
//! rule runs and every failure is reported; failures are returned as values,
//! not raised as errors.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::clock::ClockProvider;
use crate::models::User;

pub const FORENAME_REQUIRED: &str = "Forename must not be empty or whitespace";
pub const SURNAME_REQUIRED: &str = "Surname must not be empty or whitespace";
pub const EMAIL_INVALID: &str = "Email must be a valid email address";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of Birth must be specified";
pub const DATE_OF_BIRTH_IN_FUTURE: &str = "Date of Birth cannot be in the future";

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Forename,
    Surname,
    Email,
    DateOfBirth,
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forename => write!(f, "Forename"),
            Self::Surname => write!(f, "Surname"),
            Self::Email => write!(f, "Email"),
            Self::DateOfBirth => write!(f, "DateOfBirth"),
        }
    }
}

/// A single field-level failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: UserField,
    pub message: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Unvalidated user input, as bound from a create or edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCandidate {
    pub forename: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    /// `None` when the form left the date unset
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
}

impl UserCandidate {
    /// Prefill a candidate from a stored user, for editing
    pub fn from_user(user: &User) -> Self {
        Self {
            forename: Some(user.forename.clone()),
            surname: Some(user.surname.clone()),
            email: Some(user.email.clone()),
            date_of_birth: Some(user.date_of_birth),
            is_active: user.is_active,
        }
    }
}

/// Validates user candidates against the current date
pub struct UserValidator<'a> {
    clock: &'a dyn ClockProvider,
}

impl<'a> UserValidator<'a> {
    pub fn new(clock: &'a dyn ClockProvider) -> Self {
        Self { clock }
    }

    /// Run every rule; an empty list means the candidate is valid
    pub fn validate(&self, candidate: &UserCandidate) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if is_blank(candidate.forename.as_deref()) {
            errors.push(ValidationError {
                field: UserField::Forename,
                message: FORENAME_REQUIRED,
            });
        }

        if is_blank(candidate.surname.as_deref()) {
            errors.push(ValidationError {
                field: UserField::Surname,
                message: SURNAME_REQUIRED,
            });
        }

        if !candidate.email.as_deref().is_some_and(is_valid_email) {
            errors.push(ValidationError {
                field: UserField::Email,
                message: EMAIL_INVALID,
            });
        }

        match candidate.date_of_birth {
            Some(date) if !is_unspecified_date(date) => {
                if date > self.clock.today() {
                    errors.push(ValidationError {
                        field: UserField::DateOfBirth,
                        message: DATE_OF_BIRTH_IN_FUTURE,
                    });
                }
            }
            _ => errors.push(ValidationError {
                field: UserField::DateOfBirth,
                message: DATE_OF_BIRTH_REQUIRED,
            }),
        }

        errors
    }

    /// Validate and, if valid, build an unsaved user from the candidate
    pub fn check(&self, candidate: &UserCandidate) -> Result<User, Vec<ValidationError>> {
        let errors = self.validate(candidate);

        match (
            &candidate.forename,
            &candidate.surname,
            &candidate.email,
            candidate.date_of_birth,
        ) {
            (Some(forename), Some(surname), Some(email), Some(date_of_birth))
                if errors.is_empty() =>
            {
                Ok(User::new(
                    forename.as_str(),
                    surname.as_str(),
                    email.as_str(),
                    date_of_birth,
                    candidate.is_active,
                ))
            }
            _ => Err(errors),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// `local@domain`: exactly one `@`, both parts non-empty, no whitespace
///
/// Stricter than a bare "one `@`, not first or last" check: an address
/// containing whitespace is rejected even if the `@` is well placed.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// On or before 0001-01-01, the default value of an unset date field
fn is_unspecified_date(date: NaiveDate) -> bool {
    date.num_days_from_ce() <= 1
}
