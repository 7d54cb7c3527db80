use super::*;

const NAME: &str = "Ada";
const EMAIL: &str = "ada@example.com";
const SUBJECT: &str = "Hello";
const MESSAGE: &str = "I would like to talk.";

// =============================================================
// Required fields
// =============================================================

#[test]
fn any_single_empty_field_is_missing() {
    let cases = [
        ("", EMAIL, SUBJECT, MESSAGE),
        (NAME, "", SUBJECT, MESSAGE),
        (NAME, EMAIL, "", MESSAGE),
        (NAME, EMAIL, SUBJECT, ""),
    ];
    for (name, email, subject, message) in cases {
        assert_eq!(validate(name, email, subject, message), Err(ValidationError::MissingField));
    }
}

#[test]
fn whitespace_only_counts_as_empty() {
    assert_eq!(validate("   ", EMAIL, SUBJECT, MESSAGE), Err(ValidationError::MissingField));
}

#[test]
fn missing_field_wins_over_later_checks() {
    // Short name and bad email would both fail, but the empty message is checked first.
    assert_eq!(validate("A", "nope", "Hi", ""), Err(ValidationError::MissingField));
}

// =============================================================
// Length boundaries
// =============================================================

#[test]
fn name_boundary() {
    assert_eq!(validate("A", EMAIL, SUBJECT, MESSAGE), Err(ValidationError::NameTooShort));
    assert!(validate("Al", EMAIL, SUBJECT, MESSAGE).is_ok());
}

#[test]
fn name_length_is_measured_after_trim() {
    assert_eq!(validate("  A  ", EMAIL, SUBJECT, MESSAGE), Err(ValidationError::NameTooShort));
}

#[test]
fn subject_boundary() {
    assert_eq!(validate(NAME, EMAIL, "Hi", MESSAGE), Err(ValidationError::SubjectTooShort));
    assert!(validate(NAME, EMAIL, "Hey", MESSAGE).is_ok());
}

#[test]
fn message_boundary() {
    assert_eq!(validate(NAME, EMAIL, SUBJECT, "123456789"), Err(ValidationError::MessageTooShort));
    assert!(validate(NAME, EMAIL, SUBJECT, "1234567890").is_ok());
}

#[test]
fn lengths_count_utf16_units() {
    // One astral character is two UTF-16 units.
    assert!(validate("😀", EMAIL, SUBJECT, MESSAGE).is_ok());
    assert!(validate(NAME, EMAIL, "a😀", MESSAGE).is_ok());
    assert_eq!(validate(NAME, EMAIL, "😀", MESSAGE), Err(ValidationError::SubjectTooShort));
    assert!(validate(NAME, EMAIL, SUBJECT, "😀😀😀😀😀").is_ok());
    assert_eq!(validate(NAME, EMAIL, SUBJECT, "😀😀😀😀é"), Err(ValidationError::MessageTooShort));
}

#[test]
fn bmp_characters_count_once() {
    assert!(validate("Zé", EMAIL, SUBJECT, MESSAGE).is_ok());
    assert_eq!(validate("é", EMAIL, SUBJECT, MESSAGE), Err(ValidationError::NameTooShort));
}

#[test]
fn byte_order_mark_is_trimmed() {
    assert_eq!(validate("\u{FEFF}", EMAIL, SUBJECT, MESSAGE), Err(ValidationError::MissingField));
    assert_eq!(validate("\u{FEFF}A\u{FEFF}", EMAIL, SUBJECT, MESSAGE), Err(ValidationError::NameTooShort));
    let submission = validate("\u{FEFF} Ada", EMAIL, SUBJECT, MESSAGE).unwrap();
    assert_eq!(submission.name, NAME);
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_pattern_accepts_minimal_address() {
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for bad in ["ab.co", "a@bco", "a@", "@b.co", "a b@c.de", "a@b c.de", "a@@b.co", "a@b."] {
        assert!(!is_valid_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn invalid_email_is_reported_after_name_check() {
    assert_eq!(validate(NAME, "no-at-sign", SUBJECT, MESSAGE), Err(ValidationError::InvalidEmail));
    assert_eq!(validate("A", "no-at-sign", SUBJECT, MESSAGE), Err(ValidationError::NameTooShort));
}

// =============================================================
// Output
// =============================================================

#[test]
fn valid_submission_is_trimmed() {
    let submission = validate("  Ada ", " ada@example.com ", " Hello ", "  I would like to talk.  ").unwrap();
    assert_eq!(
        submission,
        Submission {
            name: NAME.to_owned(),
            email: EMAIL.to_owned(),
            subject: SUBJECT.to_owned(),
            message: MESSAGE.to_owned(),
        }
    );
}

#[test]
fn error_display_is_user_facing_text() {
    assert_eq!(ValidationError::MissingField.to_string(), "Please fill in all fields");
    assert_eq!(
        ValidationError::MessageTooShort.to_string(),
        "Please enter a longer message (at least 10 characters)"
    );
}
