//! User display formatting
//!
//! Formats users for terminal output in table and detail views.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::audit::AuditLogEntry;
use crate::models::User;

/// Format a list of users as a table
pub fn format_user_list(users: &[User], date_format: &str) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    // Calculate column widths
    let id_width = users
        .iter()
        .map(|u| u.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let forename_width = users
        .iter()
        .map(|u| u.forename.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let surname_width = users
        .iter()
        .map(|u| u.surname.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let email_width = users
        .iter()
        .map(|u| u.email.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>id_width$}  {:<forename_width$}  {:<surname_width$}  {:<email_width$}  {:<13}  {}\n",
        "Id",
        "Forename",
        "Surname",
        "Email",
        "Date of Birth",
        "Active",
    ));

    output.push_str(&format!(
        "{:->id_width$}  {:-<forename_width$}  {:-<surname_width$}  {:-<email_width$}  {:-<13}  {:-<6}\n",
        "", "", "", "", "", "",
    ));

    for user in users {
        output.push_str(&format!(
            "{:>id_width$}  {:<forename_width$}  {:<surname_width$}  {:<email_width$}  {:<13}  {}\n",
            user.id.to_string(),
            user.forename,
            user.surname,
            user.email,
            format_date(user.date_of_birth, date_format),
            yes_no(user.is_active),
        ));
    }

    output.push_str(&format!("\nTotal: {} users\n", users.len()));
    output
}

/// Format a single user's details followed by their audit history
pub fn format_user_details(user: &User, history: &[AuditLogEntry], date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("User: {}\n", user.full_name()));
    output.push_str(&format!("  ID:             {}\n", user.id));
    output.push_str(&format!("  Forename:       {}\n", user.forename));
    output.push_str(&format!("  Surname:        {}\n", user.surname));
    output.push_str(&format!("  Email:          {}\n", user.email));
    output.push_str(&format!(
        "  Date of Birth:  {}\n",
        format_date(user.date_of_birth, date_format)
    ));
    output.push_str(&format!("  Active:         {}\n", yes_no(user.is_active)));

    output.push('\n');
    if history.is_empty() {
        output.push_str("No history recorded.\n");
    } else {
        output.push_str("History:\n");
        for entry in history {
            output.push_str(&format!(
                "  #{:<5} {}  {:<6}  {}\n",
                entry.id.to_string(),
                entry.time.format("%Y-%m-%d %H:%M:%S"),
                entry.action.to_string(),
                entry.message
            ));
        }
    }

    output
}

/// Render a date with a strftime pattern, falling back to ISO 8601 when
/// chrono rejects the pattern
pub(crate) fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut output = String::new();
    match write!(output, "{}", date.format(date_format)) {
        Ok(()) => output,
        Err(_) => date.to_string(),
    }
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditLogEntryId, SnapshotId, UserId};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn user(id: i64, forename: &str, is_active: bool) -> User {
        let mut user = User::new(
            forename,
            "Raines",
            "mraines@example.com",
            NaiveDate::from_ymd_opt(1997, 11, 21).unwrap(),
            is_active,
        );
        user.id = UserId::from(id);
        user
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_user_list(&[], "%d/%m/%Y"), "No users found.");
    }

    #[test]
    fn test_list_rows() {
        let users = vec![user(1, "Memphis", true), user(12, "Sway", false)];
        let output = format_user_list(&users, "%d/%m/%Y");

        let lines: Vec<_> = output.lines().collect();
        assert!(lines[0].starts_with("Id  Forename"));
        assert!(lines[2].contains("Memphis"));
        assert!(lines[2].contains("21/11/1997"));
        assert!(lines[2].ends_with("Yes"));
        assert!(lines[3].starts_with("12"));
        assert!(lines[3].ends_with("No"));
        assert!(output.contains("Total: 2 users"));
    }

    #[test]
    fn test_bad_date_format_falls_back_to_iso() {
        let users = vec![user(1, "Memphis", true)];

        let output = format_user_list(&users, "%Q");
        assert!(output.contains("1997-11-21"));

        let details = format_user_details(&users[0], &[], "%Q");
        assert!(details.contains("Date of Birth:  1997-11-21"));
    }

    #[test]
    fn test_details_with_history() {
        let user = user(3, "Memphis", true);
        let mut entry = AuditLogEntry::create(
            user.id,
            SnapshotId::from(1),
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
        );
        entry.id = AuditLogEntryId::from(7);

        let output = format_user_details(&user, &[entry], "%Y-%m-%d");

        assert!(output.contains("User: Memphis Raines"));
        assert!(output.contains("Date of Birth:  1997-11-21"));
        assert!(output.contains("#7"));
        assert!(output.contains("2024-06-01 09:30:00"));
        assert!(output.contains("User created with ID '3'"));
    }

    #[test]
    fn test_details_without_history() {
        let output = format_user_details(&user(3, "Memphis", false), &[], "%Y-%m-%d");
        assert!(output.contains("Active:         No"));
        assert!(output.contains("No history recorded."));
    }
}
