//! Payload normalization
//!
//! Turns an arbitrarily shaped lookup payload into a [`Sample`]. The
//! function is total: whatever the upstream sends (null, an array, a deeply
//! nested object, garbage), the result is always a full ten-field row with
//! the `"-"` placeholder standing in for anything that did not resolve.

pub mod paths;

use crate::types::{Sample, PLACEHOLDER};
use chrono::{DateTime, Local, NaiveDate};
use serde_json::Value;

/// Normalize a raw lookup payload for `queried_code` into a canonical row.
pub fn normalize(payload: &Value, queried_code: &str) -> Sample {
    let record = unwrap_record(payload);

    let code = paths::first_candidate(record, paths::CODE_PATHS)
        .or_else(|| non_empty(queried_code))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let delivery_date = match paths::first_candidate(record, paths::DELIVERY_DATE_PATHS) {
        Some(raw) => format_date(&raw),
        // Delivery date is registered at hand-over, so an absent value means
        // "today" rather than "unknown".
        None => Local::now().date_naive().format("%d-%m-%Y").to_string(),
    };

    Sample {
        code,
        delivery_date,
        compartment: field(record, paths::COMPARTMENT_PATHS),
        chassis: field(record, paths::CHASSIS_PATHS),
        client: field(record, paths::CLIENT_PATHS),
        equipment_hours: field(record, paths::EQUIPMENT_HOURS_PATHS),
        oil_type: field(record, paths::OIL_TYPE_PATHS),
        status: capitalize_status(paths::first_candidate(record, paths::STATUS_PATHS)),
        collection_date: date_field(record, paths::COLLECTION_DATE_PATHS),
        technician: field(record, paths::TECHNICIAN_PATHS),
    }
}

/// Pick the record object out of the payload wrapper.
///
/// Backends variously return the record directly, a `data` envelope, or a
/// one-element result list. Anything else degrades to `Value::Null`, which
/// resolves no candidate path.
fn unwrap_record(payload: &Value) -> &Value {
    static NULL: Value = Value::Null;
    let inner = match payload.get("data") {
        Some(data) if !data.is_null() => data,
        _ => payload,
    };
    match inner {
        Value::Array(items) => items.first().unwrap_or(&NULL),
        other => other,
    }
}

fn field(record: &Value, candidates: &[&str]) -> String {
    paths::first_candidate(record, candidates).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn date_field(record: &Value, candidates: &[&str]) -> String {
    match paths::first_candidate(record, candidates) {
        Some(raw) => format_date(&raw),
        None => PLACEHOLDER.to_string(),
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Capitalize the first character of a status value, lowercasing the rest.
fn capitalize_status(status: Option<String>) -> String {
    let Some(status) = status else {
        return PLACEHOLDER.to_string();
    };
    let lower = status.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Reformat a date-like string into `DD-MM-YYYY`; placeholder on failure.
fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    None
}
