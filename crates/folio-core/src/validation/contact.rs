//! Contact form field rules
//!
//! Lengths are measured in characters on the trimmed value.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub(crate) const NAME_MIN: usize = 2;
pub(crate) const SUBJECT_MIN: usize = 5;
pub(crate) const MESSAGE_MIN: usize = 10;
pub(crate) const MESSAGE_MAX: usize = 1000;

/// `local@domain.tld`, no whitespace, exactly one `@`
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn validate_contact_name(value: &str) -> Result<(), ValidationError> {
    match trimmed_len(value) {
        0 => Err(invalid("required", "Le nom est requis")),
        n if n < NAME_MIN => Err(invalid(
            "too_short",
            "Le nom doit contenir au moins 2 caractères",
        )),
        _ => Ok(()),
    }
}

pub(crate) fn validate_contact_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(invalid("required", "L'email est requis"))
    } else if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(invalid("email", "L'email n'est pas valide"))
    }
}

pub(crate) fn validate_contact_subject(value: &str) -> Result<(), ValidationError> {
    match trimmed_len(value) {
        0 => Err(invalid("required", "Le sujet est requis")),
        n if n < SUBJECT_MIN => Err(invalid(
            "too_short",
            "Le sujet doit contenir au moins 5 caractères",
        )),
        _ => Ok(()),
    }
}

pub(crate) fn validate_contact_message(value: &str) -> Result<(), ValidationError> {
    match trimmed_len(value) {
        0 => Err(invalid("required", "Le message est requis")),
        n if n < MESSAGE_MIN => Err(invalid(
            "too_short",
            "Le message doit contenir au moins 10 caractères",
        )),
        n if n > MESSAGE_MAX => Err(invalid(
            "too_long",
            "Le message ne peut pas dépasser 1000 caractères",
        )),
        _ => Ok(()),
    }
}
