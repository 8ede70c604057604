//! Field validation rules for the authentication forms.
//!
//! DESIGN
//! ======
//! Every rule is a pure function returning `Option<ValidationError>`; `None`
//! means the value passes. Rules report only their first failing reason so
//! the inline message under a field is always a single sentence. Composition
//! into per-form shapes lives in `util::schema`.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::messages;

/// Minimum password length accepted by the strength rule.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Minimum length for first and last names on signup.
pub const NAME_MIN_LEN: usize = 2;

/// Characters that satisfy the "special character" password requirement.
pub const PASSWORD_SPECIAL_CHARS: &str = "@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Form field identifiers shared by all three authentication forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Wire/DOM name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationKind {
    Empty,
    Format,
    TooShort { min: usize },
    MissingLetter,
    MissingDigit,
    MissingSpecial,
    Mismatch,
}

/// A single failing constraint on a single field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationKind, message: &str) -> Self {
        Self { field, kind, message: message.to_owned() }
    }
}

/// Validate an e-mail address: non-blank, then `local@domain.tld` shape.
pub fn validate_email(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::new(Field::Email, ValidationKind::Empty, messages::EMAIL_REQUIRED));
    }
    if !is_email_shaped(value) {
        return Some(ValidationError::new(Field::Email, ValidationKind::Format, messages::EMAIL_INVALID));
    }
    None
}

/// Full password strength rule.
///
/// Checks run in priority order (empty, length, letter, digit, special) and
/// only the first failure is reported.
pub fn validate_password(value: &str) -> Option<ValidationError> {
    let fail = |kind, message| Some(ValidationError::new(Field::Password, kind, message));

    if value.is_empty() {
        return fail(ValidationKind::Empty, messages::PASSWORD_REQUIRED);
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return fail(ValidationKind::TooShort { min: PASSWORD_MIN_LEN }, messages::PASSWORD_TOO_SHORT);
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return fail(ValidationKind::MissingLetter, messages::PASSWORD_MISSING_LETTER);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return fail(ValidationKind::MissingDigit, messages::PASSWORD_MISSING_DIGIT);
    }
    if !value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return fail(ValidationKind::MissingSpecial, messages::PASSWORD_MISSING_SPECIAL);
    }
    None
}

/// Presence-only password rule used by the login form.
pub fn validate_password_present(value: &str) -> Option<ValidationError> {
    value
        .is_empty()
        .then(|| ValidationError::new(Field::Password, ValidationKind::Empty, messages::PASSWORD_REQUIRED))
}

/// Exact, case-sensitive comparison of a password and its confirmation.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<ValidationError> {
    (password != confirmation).then(|| {
        ValidationError::new(Field::PasswordConfirmation, ValidationKind::Mismatch, messages::PASSWORD_MISMATCH)
    })
}

/// Required + minimum-length check for free-text fields such as names.
pub fn validate_min_len(
    field: Field,
    value: &str,
    min: usize,
    required_message: &str,
    too_short_message: &str,
) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::new(field, ValidationKind::Empty, required_message));
    }
    if value.chars().count() < min {
        return Some(ValidationError::new(field, ValidationKind::TooShort { min }, too_short_message));
    }
    None
}

/// Whether `value` has the `local@domain.tld` shape, ignoring emptiness.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}
