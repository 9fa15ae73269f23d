//! Field checks shared by the venue, artist and show forms. Each check
//! records its message on the given field and returns the cleaned value.

use url::Url;

use super::FormErrors;
use super::choices::{is_genre, is_state};

pub const REQUIRED: &str = "This field is required.";
pub const MAX_DESCRIPTION_CHARS: usize = 500;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

pub fn required(errors: &mut FormErrors, field: &'static str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, REQUIRED);
    }
    value.to_string()
}

/// Blank input becomes `None`.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn state(errors: &mut FormErrors, field: &'static str, value: &str) -> String {
    let value = required(errors, field, value);
    if !value.is_empty() && !is_state(&value) {
        errors.push(field, "Not a valid choice.");
    }
    value
}

/// Drops duplicates, keeps submission order.
pub fn genres(errors: &mut FormErrors, field: &'static str, values: &[String]) -> Vec<String> {
    let mut picked: Vec<String> = Vec::with_capacity(values.len());
    for value in values.iter().map(|value| value.trim()) {
        if value.is_empty() {
            continue;
        }
        if !is_genre(value) {
            errors.push(field, format!("'{value}' is not a valid choice."));
            continue;
        }
        if !picked.iter().any(|seen| seen == value) {
            picked.push(value.to_string());
        }
    }
    picked
}

pub fn phone(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<String> {
    let value = optional(value)?;
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ' ' | '(' | ')' | '+'));
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !allowed {
        errors.push(field, "Phone numbers may only contain digits, spaces and - . ( ) +.");
    } else if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        errors.push(
            field,
            format!("Phone numbers need {MIN_PHONE_DIGITS} to {MAX_PHONE_DIGITS} digits."),
        );
    }
    Some(value)
}

pub fn link(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<String> {
    let value = optional(value)?;
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {}
        _ => errors.push(field, "Invalid URL."),
    }
    Some(value)
}

pub fn description(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<String> {
    let value = optional(value)?;
    if value.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(
            field,
            format!("Field cannot be longer than {MAX_DESCRIPTION_CHARS} characters."),
        );
    }
    Some(value)
}

/// HTML checkboxes post `y`, `on` or `true` when ticked and nothing otherwise.
pub fn checkbox(value: Option<&str>) -> bool {
    value
        .map(|value| {
            let value = value.trim();
            ["y", "on", "true"]
                .iter()
                .any(|accepted| value.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}
