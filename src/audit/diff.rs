//! Field-level diffs between audit snapshots
//!
//! Compares the JSON form of two snapshots so every user field is covered
//! without listing them by hand.

use serde_json::Value;

use super::entry::AuditLogSnapshot;

/// One changed field between a before and an after snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: String,
    pub before: String,
    pub after: String,
}

impl std::fmt::Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.before, self.after)
    }
}

/// List the fields whose values differ between two snapshots
///
/// Snapshot ids are ignored. Fields come out sorted by name.
pub fn snapshot_changes(before: &AuditLogSnapshot, after: &AuditLogSnapshot) -> Vec<FieldChange> {
    let (Ok(Value::Object(before_obj)), Ok(Value::Object(after_obj))) =
        (serde_json::to_value(before), serde_json::to_value(after))
    else {
        return Vec::new();
    };

    let mut changes = Vec::new();
    for (key, before_val) in &before_obj {
        if key == "id" {
            continue;
        }
        let after_val = after_obj.get(key).unwrap_or(&Value::Null);
        if before_val != after_val {
            changes.push(FieldChange {
                field: key.clone(),
                before: format_value(before_val),
                after: format_value(after_val),
            });
        }
    }

    changes
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Truncate long strings
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
