//! Contact form validation.
//!
//! Checks run in a fixed order and the first failure wins; later checks are
//! not evaluated. Lengths count UTF-16 code units after trimming, matching
//! what the browser reports for an input's value.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

const MIN_NAME_UNITS: usize = 2;
const MIN_SUBJECT_UNITS: usize = 3;
const MIN_MESSAGE_UNITS: usize = 10;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// `local@domain.tld`: no whitespace, one `@`, at least one `.` after it.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A validated, trimmed contact form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Why a submission was rejected. `Display` is the text shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid name (at least 2 characters)")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a subject (at least 3 characters)")]
    SubjectTooShort,
    #[error("Please enter a longer message (at least 10 characters)")]
    MessageTooShort,
}

/// Strip leading and trailing whitespace, including a stray byte order mark.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Trim and validate raw field values.
///
/// # Errors
///
/// Returns the first failing check, in order: any empty field, short name,
/// malformed email, short subject, short message.
pub fn validate(name: &str, email: &str, subject: &str, message: &str) -> Result<Submission, ValidationError> {
    let [name, email, subject, message] = [name, email, subject, message].map(trim_field);

    if [name, email, subject, message].iter().any(|f| f.is_empty()) {
        return Err(ValidationError::MissingField);
    }
    if utf16_len(name) < MIN_NAME_UNITS {
        return Err(ValidationError::NameTooShort);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if utf16_len(subject) < MIN_SUBJECT_UNITS {
        return Err(ValidationError::SubjectTooShort);
    }
    if utf16_len(message) < MIN_MESSAGE_UNITS {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(Submission {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    })
}
