//! Audit log CLI commands

use clap::Subcommand;

use crate::audit::{AuditAction, AuditLogService};
use crate::clock::ClockProvider;
use crate::config::settings::Settings;
use crate::display::{format_entry_details, format_entry_list};
use crate::error::{AdminError, AdminResult};
use crate::models::{AuditLogEntryId, UserId};
use crate::storage::Storage;

/// Log subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// List log entries
    List {
        /// Only entries for this action (create, update, delete)
        #[arg(short, long)]
        action: Option<AuditAction>,
        /// Only entries for this user ID
        #[arg(short, long)]
        user: Option<UserId>,
    },
    /// Show a log entry with its before and after state
    Show {
        /// Log entry ID
        id: AuditLogEntryId,
    },
}

/// Handle a log command
pub fn handle_log_command(
    storage: &Storage,
    clock: &dyn ClockProvider,
    settings: &Settings,
    cmd: LogCommands,
) -> AdminResult<()> {
    let service = AuditLogService::new(storage, clock);

    match cmd {
        LogCommands::List { action, user } => {
            let entries = match (user, action) {
                (Some(user_id), Some(action)) => service
                    .filter_by_user_id(user_id)?
                    .into_iter()
                    .filter(|e| e.action == action)
                    .collect(),
                (Some(user_id), None) => service.filter_by_user_id(user_id)?,
                (None, Some(action)) => service.filter_by_action(action)?,
                (None, None) => service.get_all()?,
            };
            print!("{}", format_entry_list(&entries));
        }

        LogCommands::Show { id } => {
            let details = service
                .get_entry_by_id(id)?
                .ok_or_else(|| AdminError::entry_not_found(id.to_string()))?;
            let changes = service.changes(&details);
            print!(
                "{}",
                format_entry_details(&details, &changes, &settings.date_format)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::config::paths::AdminPaths;
    use tempfile::TempDir;

    #[test]
    fn test_show_missing_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let result = handle_log_command(
            &storage,
            &SystemClock,
            &Settings::default(),
            LogCommands::Show {
                id: AuditLogEntryId::from(3),
            },
        );

        let err = result.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Audit log entry not found: 3");
    }
}
