//! Local, stateless checks applied to every argument before a request is built. Nothing in here
//! talks to the appliance: an ID that passes is well formed, not necessarily one that exists.
//!
//! The `is_valid_*` functions only answer yes or no, callers turn a `false` into an
//! [`InvalidArgument`] naming the offending field. The `verify_*` functions do that conversion
//! themselves and hand back the normalized value.

mod field_value;
mod force;
mod identifiers;
mod invalid_argument;
mod log_severity;
mod sort_direction;

pub use field_value::FieldValue;
pub use force::Force;
pub use identifiers::{AccountId, DriveId};
pub use invalid_argument::InvalidArgument;
pub use log_severity::LogSeverity;
pub use sort_direction::SortDirection;

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::api::Parameters;

// A pattern that somehow fails to compile matches nothing, so every ID is rejected.
fn volume_id_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^volume-[0-9a-f]{8}$").ok())
        .as_ref()
}

fn vpsaos_account_id_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[0-9a-f]{32}$").ok())
        .as_ref()
}

/// Text fields end up inside a JSON body the appliance parses loosely, a single quote breaks it.
pub fn is_valid_field(value: &str) -> bool {
    !value.is_empty() && !value.contains('\'')
}

/// Drives are addressed by the name of their backing volume.
pub fn is_valid_drive_id(value: &str) -> bool {
    is_valid_volume_id(value)
}

pub fn is_valid_volume_id(value: &str) -> bool {
    volume_id_pattern().is_some_and(|pattern| pattern.is_match(value))
}

pub fn is_valid_vpsaos_account_id(value: &str) -> bool {
    vpsaos_account_id_pattern().is_some_and(|pattern| pattern.is_match(value))
}

/// Parses loosely typed numeric input (command lines, config values) into an integer. Endpoint
/// functions take integers, so this is for callers holding text: coerce first, then pass the
/// result on and let the matching `verify_*` function do the range check.
///
/// ```
/// use zadarapy::validators::{coerce_integer, verify_start_limit};
///
/// let start = coerce_integer("start", " 20 ").unwrap();
/// assert_eq!(verify_start_limit(Some(start), None).unwrap()["start"], 20);
///
/// assert!(coerce_integer("limit", "twenty").is_err());
/// ```
pub fn coerce_integer(field: &'static str, raw: &str) -> Result<i64, InvalidArgument> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InvalidArgument::new(field, raw, "is not an integer"))
}

pub fn verify_force(value: &str) -> Result<Force, InvalidArgument> {
    value.parse()
}

/// Sampling intervals are whole seconds, at least one.
pub fn verify_interval(value: i64) -> Result<u32, InvalidArgument> {
    if value < 1 {
        return Err(InvalidArgument::new(
            "interval",
            value,
            "must be at least 1 second",
        ));
    }

    u32::try_from(value).map_err(|_| InvalidArgument::new("interval", value, "is too large"))
}

pub fn verify_severity(code: i64) -> Result<LogSeverity, InvalidArgument> {
    LogSeverity::try_from(code)
}

pub fn verify_sort(value: &str) -> Result<SortDirection, InvalidArgument> {
    value.parse()
}

/// Checks the pagination pair shared by the listing endpoints. Absent values are left out of the
/// returned parameters entirely so the appliance applies its own defaults.
pub fn verify_start_limit(
    start: Option<i64>,
    limit: Option<i64>,
) -> Result<Parameters, InvalidArgument> {
    let mut parameters = Parameters::new();

    for (field, value) in [("start", start), ("limit", limit)] {
        let Some(value) = value else {
            continue;
        };

        if value < 0 {
            return Err(InvalidArgument::new(field, value, "cannot be negative"));
        }

        parameters.insert(field.to_string(), Value::from(value));
    }

    Ok(parameters)
}

/// Composite check for the log listing. `severity` of `None` means every severity and is omitted
/// from the parameters, the same as an absent `start` or `limit`.
pub fn verify_start_limit_sort_severity(
    start: Option<i64>,
    limit: Option<i64>,
    sort: &str,
    severity: Option<i64>,
) -> Result<Parameters, InvalidArgument> {
    let mut parameters = verify_start_limit(start, limit)?;

    let sort = verify_sort(sort)?;
    parameters.insert("sort".to_string(), Value::from(sort.as_str()));

    if let Some(code) = severity {
        let severity = verify_severity(code)?;
        parameters.insert("severity".to_string(), Value::from(severity.code()));
    }

    Ok(parameters)
}
