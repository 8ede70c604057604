//! Per-form field shapes composed from the validation rules.
//!
//! DESIGN
//! ======
//! A schema is a static list of `(field, rules)` pairs. Rules are tagged
//! values evaluated in order; the first failure for a field wins. Cross-field
//! rules name the field they read so callers can re-validate dependents when
//! that field changes.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use super::messages;
use super::validation::{
    Field, NAME_MIN_LEN, ValidationError, ValidationKind, validate_confirmation, validate_email, validate_min_len,
    validate_password, validate_password_present,
};

/// Current raw input of an authentication form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordConfirmation => &mut self.password_confirmation,
        };
        *slot = value.into();
    }
}

/// A single tagged constraint on a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    Required(&'static str),
    /// Value must have at least `min` characters.
    MinLen { min: usize, message: &'static str },
    /// Required + `local@domain.tld` shape.
    Email,
    /// Required only (login).
    PasswordPresent,
    /// Full strength rule (signup).
    PasswordStrength,
    /// Must equal the value of another field.
    Matches(Field),
}

impl Rule {
    fn check(self, field: Field, values: &FormValues) -> Option<ValidationError> {
        let value = values.get(field);
        match self {
            Self::Required(message) => {
                value.is_empty().then(|| ValidationError::new(field, ValidationKind::Empty, message))
            }
            Self::MinLen { min, message } => validate_min_len(field, value, min, message, message),
            Self::Email => validate_email(value).map(|e| ValidationError { field, ..e }),
            Self::PasswordPresent => validate_password_present(value).map(|e| ValidationError { field, ..e }),
            Self::PasswordStrength => validate_password(value).map(|e| ValidationError { field, ..e }),
            Self::Matches(other) => {
                validate_confirmation(values.get(other), value).map(|e| ValidationError { field, ..e })
            }
        }
    }

    fn reads(self) -> Option<Field> {
        match self {
            Self::Matches(other) => Some(other),
            _ => None,
        }
    }
}

/// Constraints for one field of a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub rules: &'static [Rule],
}

/// Ordered field constraints for one form.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

pub static LOGIN: Schema = Schema {
    name: "login",
    fields: &[
        FieldSpec { field: Field::Email, rules: &[Rule::Email] },
        FieldSpec { field: Field::Password, rules: &[Rule::PasswordPresent] },
    ],
};

pub static SIGNUP: Schema = Schema {
    name: "signup",
    fields: &[
        FieldSpec {
            field: Field::FirstName,
            rules: &[
                Rule::Required(messages::FIRST_NAME_REQUIRED),
                Rule::MinLen { min: NAME_MIN_LEN, message: messages::FIRST_NAME_TOO_SHORT },
            ],
        },
        FieldSpec {
            field: Field::LastName,
            rules: &[
                Rule::Required(messages::LAST_NAME_REQUIRED),
                Rule::MinLen { min: NAME_MIN_LEN, message: messages::LAST_NAME_TOO_SHORT },
            ],
        },
        FieldSpec { field: Field::Email, rules: &[Rule::Email] },
        FieldSpec { field: Field::Password, rules: &[Rule::PasswordStrength] },
        FieldSpec {
            field: Field::PasswordConfirmation,
            rules: &[Rule::Required(messages::CONFIRMATION_REQUIRED), Rule::Matches(Field::Password)],
        },
    ],
};

pub static FORGOT_PASSWORD: Schema = Schema {
    name: "forgot-password",
    fields: &[FieldSpec { field: Field::Email, rules: &[Rule::Email] }],
};

impl Schema {
    /// Whether this schema declares `field`.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.iter().any(|spec| spec.field == field)
    }

    /// Fields in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().map(|spec| spec.field)
    }

    /// First failing rule for `field`, or `None` if it passes or is not part
    /// of this schema.
    pub fn validate_field(&self, field: Field, values: &FormValues) -> Option<ValidationError> {
        let spec = self.fields.iter().find(|spec| spec.field == field)?;
        spec.rules.iter().find_map(|rule| rule.check(field, values))
    }

    /// Validate every field, returning one error per failing field in
    /// declaration order.
    pub fn validate(&self, values: &FormValues) -> Vec<ValidationError> {
        self.field_names()
            .filter_map(|field| self.validate_field(field, values))
            .collect()
    }

    /// Fields whose rules read `field` (e.g. confirmation reads password).
    pub fn dependents_of(&self, field: Field) -> impl Iterator<Item = Field> + '_ {
        self.fields
            .iter()
            .filter(move |spec| spec.rules.iter().any(|rule| rule.reads() == Some(field)))
            .map(|spec| spec.field)
    }
}
