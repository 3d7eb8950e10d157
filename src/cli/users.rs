//! User CLI commands
//!
//! Implements CLI commands for user management. Create and edit bind their
//! arguments into a `UserCandidate` and run the validator before anything
//! reaches the user service.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::clock::ClockProvider;
use crate::config::settings::Settings;
use crate::display::{format_user_details, format_user_list};
use crate::error::{AdminError, AdminResult};
use crate::models::User;
use crate::services::{UserCandidate, UserFilter, UserService, UserValidator};
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List users
    List {
        /// Which users to show (all, active, inactive)
        #[arg(short, long, default_value = "all")]
        filter: UserFilter,
    },
    /// Show user details and history
    Show {
        /// User ID or email
        user: String,
    },
    /// Create a new user
    Create {
        #[arg(long)]
        forename: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,
        /// Mark the user as active
        #[arg(long)]
        active: bool,
    },
    /// Edit a user; unspecified fields keep their stored values
    Edit {
        /// User ID or email
        user: String,
        #[arg(long)]
        forename: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,
        /// Active flag (true or false)
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a user
    Delete {
        /// User ID or email
        user: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    clock: &dyn ClockProvider,
    settings: &Settings,
    cmd: UserCommands,
) -> AdminResult<()> {
    let service = UserService::new(storage, clock);
    let validator = UserValidator::new(clock);

    match cmd {
        UserCommands::List { filter } => {
            let users = service.list(filter)?;
            print!("{}", format_user_list(&users, &settings.date_format));
        }

        UserCommands::Show { user } => {
            let user = find_user(&service, &user)?;
            let history = service.audit().filter_by_user_id(user.id)?;
            print!(
                "{}",
                format_user_details(&user, &history, &settings.date_format)
            );
        }

        UserCommands::Create {
            forename,
            surname,
            email,
            dob,
            active,
        } => {
            let candidate = UserCandidate {
                forename,
                surname,
                email,
                date_of_birth: dob.as_deref().map(parse_date).transpose()?,
                is_active: active,
            };

            let user = submit(&validator, &candidate)?;
            let user = service.create_user(user)?;

            println!("Created user: {}", user);
            println!("  ID: {}", user.id);
        }

        UserCommands::Edit {
            user,
            forename,
            surname,
            email,
            dob,
            active,
        } => {
            let stored = find_user(&service, &user)?;

            let mut candidate = UserCandidate::from_user(&stored);
            if forename.is_some() {
                candidate.forename = forename;
            }
            if surname.is_some() {
                candidate.surname = surname;
            }
            if email.is_some() {
                candidate.email = email;
            }
            if let Some(dob) = dob {
                candidate.date_of_birth = Some(parse_date(&dob)?);
            }
            if let Some(active) = active {
                candidate.is_active = active;
            }

            let mut user = submit(&validator, &candidate)?;
            user.id = stored.id;
            let updated = service.update_user(user)?;

            println!("Updated user: {}", updated);
        }

        UserCommands::Delete { user, force } => {
            let user = find_user(&service, &user)?;

            if !force {
                println!("About to delete user: {}", user);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete_user(&user)?;
            println!("Deleted user: {}", deleted);
        }
    }

    Ok(())
}

fn find_user(service: &UserService, identifier: &str) -> AdminResult<User> {
    service
        .find(identifier)?
        .ok_or_else(|| AdminError::user_not_found(identifier))
}

/// Validate a candidate, printing every field failure
fn submit(validator: &UserValidator, candidate: &UserCandidate) -> AdminResult<User> {
    validator.check(candidate).map_err(|errors| {
        eprintln!("The user could not be saved:");
        for error in &errors {
            eprintln!("  {}", error);
        }
        AdminError::rejected_form(errors.len())
    })
}

fn parse_date(value: &str) -> AdminResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AdminError::InvalidInput(format!(
            "Invalid date: '{}'. Use the format YYYY-MM-DD",
            value
        ))
    })
}
