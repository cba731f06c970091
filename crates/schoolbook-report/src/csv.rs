//! CSV encoding for derived-report downloads.
//!
//! Deliberately NOT RFC 4180: every field value is JSON-encoded (strings
//! quoted per JSON rules, numbers bare) and joined with literal commas,
//! rows joined with `\n`. A field containing a comma or quote comes out
//! JSON-escaped, not CSV-quoted. This matches the original exporter
//! byte for byte, which existing downstream consumers rely on.

use serde_json::Value;

use schoolbook_core::analytics::{DailyAttendanceRate, StudentAttendanceRate};

/// Encode rows of JSON objects as CSV.
///
/// The header row is the first object's keys in iteration order; rows
/// missing a key (or carrying `null`) encode that field as `""`. Empty
/// input yields the empty string.
pub fn to_csv(rows: &[Value]) -> String {
    let Some(first) = rows.first().and_then(|r| r.as_object()) else {
        return String::new();
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));

    for row in rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|h| {
                let value = row.get(*h).cloned().unwrap_or(Value::Null);
                let value = if value.is_null() {
                    Value::String(String::new())
                } else {
                    value
                };
                // Infallible for values we just built from a Value.
                serde_json::to_string(&value).unwrap_or_default()
            })
            .collect();
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// The attendance-by-student view as CSV (`id,name,rate`).
pub fn by_student_csv(rates: &[StudentAttendanceRate]) -> String {
    let rows: Vec<Value> = rates
        .iter()
        .map(|r| serde_json::json!({ "id": r.id, "name": r.name, "rate": r.rate }))
        .collect();
    to_csv(&rows)
}

/// The attendance-by-day view as CSV (`date,rate`).
pub fn by_day_csv(days: &[DailyAttendanceRate]) -> String {
    let rows: Vec<Value> = days
        .iter()
        .map(|d| serde_json::json!({ "date": d.date, "rate": d.rate }))
        .collect();
    to_csv(&rows)
}
