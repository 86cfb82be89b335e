//! Field rules applied to submitted forms before they reach the service.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::genres::{GENRE_CHOICES, Genres};
use crate::error::BookingError;

/// State and territory codes accepted in the `state` field.
pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Naive timestamp layout accepted for `start_time`, read as UTC.
const NAIVE_START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trims `value` and rejects it when blank.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] naming `field` when blank.
pub fn required(field: &str, value: &str) -> Result<String, BookingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trims `value`, mapping blank input to `None`.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Requires a state code from [`STATE_CHOICES`].
///
/// # Errors
///
/// Returns [`BookingError::Validation`] for a blank or unknown code.
pub fn state_code(value: &str) -> Result<String, BookingError> {
    let code = required("state", value)?.to_ascii_uppercase();
    if !STATE_CHOICES.contains(&code.as_str()) {
        return Err(BookingError::Validation(format!("unknown state: {code}")));
    }
    Ok(code)
}

/// Requires at least one genre, each from [`GENRE_CHOICES`].
///
/// # Errors
///
/// Returns [`BookingError::Validation`] when empty or a genre is unknown.
pub fn genres(values: &[String]) -> Result<Genres, BookingError> {
    if values.is_empty() {
        return Err(BookingError::Validation(
            "at least one genre is required".to_string(),
        ));
    }
    let mut names = Vec::with_capacity(values.len());
    for value in values {
        let name = value.trim();
        if !GENRE_CHOICES.contains(&name) {
            return Err(BookingError::Validation(format!("unknown genre: {name}")));
        }
        names.push(name.to_string());
    }
    Ok(Genres::new(names))
}

/// Accepts a blank value or an absolute `http`/`https` URL.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] naming `field` otherwise.
pub fn link(field: &str, value: &str) -> Result<Option<String>, BookingError> {
    let Some(url) = optional(value) else {
        return Ok(None);
    };
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(Some(url)),
        _ => Err(BookingError::Validation(format!("{field} must be a URL"))),
    }
}

/// Accepts a blank value or a phone number made of digits and the usual
/// punctuation.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] for any other character or a value
/// without digits.
pub fn phone(value: &str) -> Result<Option<String>, BookingError> {
    let Some(number) = optional(value) else {
        return Ok(None);
    };
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')' | '+');
    if !number.chars().all(allowed) || !number.chars().any(|c| c.is_ascii_digit()) {
        return Err(BookingError::Validation(format!(
            "invalid phone number: {number}"
        )));
    }
    Ok(Some(number))
}

/// Requires a positive record key.
///
/// # Errors
///
/// Returns [`BookingError::Validation`] naming `field` for zero or negative
/// keys.
pub fn record_key(field: &str, value: i64) -> Result<i64, BookingError> {
    if value <= 0 {
        return Err(BookingError::Validation(format!(
            "{field} must be a positive id"
        )));
    }
    Ok(value)
}

/// Parses a show start time. Blank input means `now`.
///
/// Accepts RFC 3339 or `YYYY-MM-DD HH:MM:SS` (taken as UTC).
///
/// # Errors
///
/// Returns [`BookingError::Validation`] for any other layout.
pub fn start_time(value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, BookingError> {
    let Some(raw) = optional(value) else {
        return Ok(now);
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, NAIVE_START_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| BookingError::Validation(format!("invalid start_time: {raw}")))
}
