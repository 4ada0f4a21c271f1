use std::sync::LazyLock;

use regex::Regex;

use crate::domain::fields::{ContactFields, Field, FieldErrors};

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_INVALID: &str = "Enter a valid email address";
pub const PHONE_INVALID: &str = "Enter a valid 10-digit phone number";

// Something before '@', something after, and a dot-separated tail.
// Whitespace and extra '@' are rejected outright.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// Exactly 10 ASCII digits, nothing around them.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

/// Check all four fields against their rules. Every rule runs regardless of
/// what the others found; the result is empty exactly when the card is
/// ready to save.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.first_name.is_empty() {
        errors.set(Field::FirstName, FIRST_NAME_REQUIRED.to_string());
    }

    if fields.last_name.is_empty() {
        errors.set(Field::LastName, LAST_NAME_REQUIRED.to_string());
    }

    // An empty string fails the anchored one-or-more patterns, so the
    // "required" case needs no separate branch for these two.
    if !EMAIL_RE.is_match(&fields.email) {
        errors.set(Field::Email, EMAIL_INVALID.to_string());
    }

    if !PHONE_RE.is_match(&fields.mobile_number) {
        errors.set(Field::MobileNumber, PHONE_INVALID.to_string());
    }

    errors
}
