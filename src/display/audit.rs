//! Audit log display formatting

use crate::audit::{AuditLogEntry, AuditLogEntryDetails, AuditLogSnapshot, FieldChange};

use super::user::{format_date, yes_no};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format log entries as a table
pub fn format_entry_list(entries: &[AuditLogEntry]) -> String {
    if entries.is_empty() {
        return "No log entries found.".to_string();
    }

    let id_width = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>id_width$}  {:<19}  {:<6}  {:>7}  {}\n",
        "Id", "Time", "Action", "User Id", "Message",
    ));
    output.push_str(&format!(
        "{:->id_width$}  {:-<19}  {:-<6}  {:->7}  {:-<30}\n",
        "", "", "", "", "",
    ));

    for entry in entries {
        output.push_str(&format!(
            "{:>id_width$}  {:<19}  {:<6}  {:>7}  {}\n",
            entry.id.to_string(),
            entry.time.format(TIME_FORMAT).to_string(),
            entry.action.to_string(),
            entry.user_id.to_string(),
            entry.message,
        ));
    }

    output.push_str(&format!("\nTotal: {} entries\n", entries.len()));
    output
}

/// Format one entry with its Before/After panels and changed fields
pub fn format_entry_details(
    details: &AuditLogEntryDetails,
    changes: &[FieldChange],
    date_format: &str,
) -> String {
    let entry = &details.entry;
    let mut output = String::new();

    output.push_str(&format!("Log Entry: {}\n", entry.id));
    output.push_str(&format!("  Time:     {} UTC\n", entry.time.format(TIME_FORMAT)));
    output.push_str(&format!("  Action:   {}\n", entry.action));
    output.push_str(&format!("  User Id:  {}\n", entry.user_id));
    output.push_str(&format!("  Message:  {}\n", entry.message));

    if let Some(before) = &details.before {
        output.push('\n');
        output.push_str(&format_snapshot("Before", before, date_format));
    }

    if let Some(after) = &details.after {
        output.push('\n');
        output.push_str(&format_snapshot("After", after, date_format));
    }

    if !changes.is_empty() {
        output.push_str("\nChanges:\n");
        for change in changes {
            output.push_str(&format!("  {}\n", change));
        }
    }

    output
}

fn format_snapshot(title: &str, snapshot: &AuditLogSnapshot, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}:\n", title));
    output.push_str(&format!("  Forename:       {}\n", snapshot.forename));
    output.push_str(&format!("  Surname:        {}\n", snapshot.surname));
    output.push_str(&format!("  Email:          {}\n", snapshot.email));
    output.push_str(&format!(
        "  Date of Birth:  {}\n",
        format_date(snapshot.date_of_birth, date_format)
    ));
    output.push_str(&format!("  Active:         {}\n", yes_no(snapshot.is_active)));
    output
}
