use super::*;

fn signup_values() -> FormValues {
    FormValues {
        first_name: "Ana".to_owned(),
        last_name: "Souza".to_owned(),
        email: "ana@teste.com".to_owned(),
        password: "123456Ab@".to_owned(),
        password_confirmation: "123456Ab@".to_owned(),
    }
}

#[test]
fn form_values_get_and_set_address_the_same_slot() {
    let mut values = FormValues::default();
    values.set(Field::LastName, "Lima");
    assert_eq!(values.get(Field::LastName), "Lima");
    assert_eq!(values.last_name, "Lima");
    assert_eq!(values.get(Field::FirstName), "");
}

// =============================================================
// LOGIN
// =============================================================

#[test]
fn login_empty_reports_both_fields_in_order() {
    let errors = LOGIN.validate(&FormValues::default());
    let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Email, Field::Password]);
}

#[test]
fn login_accepts_weak_but_present_password() {
    let values = FormValues { email: "a@b.co".to_owned(), password: "x".to_owned(), ..FormValues::default() };
    assert!(LOGIN.validate(&values).is_empty());
}

#[test]
fn login_ignores_fields_outside_schema() {
    assert!(!LOGIN.contains(Field::FirstName));
    assert!(LOGIN.validate_field(Field::FirstName, &FormValues::default()).is_none());
}

// =============================================================
// SIGNUP
// =============================================================

#[test]
fn signup_valid_payload_has_no_errors() {
    assert!(SIGNUP.validate(&signup_values()).is_empty());
}

#[test]
fn signup_short_names_use_field_specific_messages() {
    let values = FormValues { first_name: "A".to_owned(), last_name: "B".to_owned(), ..signup_values() };
    let errors = SIGNUP.validate(&values);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, messages::FIRST_NAME_TOO_SHORT);
    assert_eq!(errors[1].message, messages::LAST_NAME_TOO_SHORT);
}

#[test]
fn signup_empty_names_are_required_not_short() {
    let values = FormValues { first_name: String::new(), ..signup_values() };
    let err = SIGNUP.validate_field(Field::FirstName, &values).expect("empty first name");
    assert_eq!(err.kind, ValidationKind::Empty);
    assert_eq!(err.message, messages::FIRST_NAME_REQUIRED);
}

#[test]
fn signup_enforces_full_password_strength() {
    let values = FormValues {
        password: "abcdefgh".to_owned(),
        password_confirmation: "abcdefgh".to_owned(),
        ..signup_values()
    };
    let err = SIGNUP.validate_field(Field::Password, &values).expect("weak password");
    assert_eq!(err.kind, ValidationKind::MissingDigit);
}

#[test]
fn signup_confirmation_required_before_mismatch() {
    let values = FormValues { password_confirmation: String::new(), ..signup_values() };
    let err = SIGNUP.validate_field(Field::PasswordConfirmation, &values).expect("missing confirmation");
    assert_eq!(err.message, messages::CONFIRMATION_REQUIRED);

    let values = FormValues { password_confirmation: "123456Ab#".to_owned(), ..signup_values() };
    let err = SIGNUP.validate_field(Field::PasswordConfirmation, &values).expect("mismatch");
    assert_eq!(err.field, Field::PasswordConfirmation);
    assert_eq!(err.kind, ValidationKind::Mismatch);
}

#[test]
fn signup_confirmation_depends_on_password() {
    let dependents: Vec<Field> = SIGNUP.dependents_of(Field::Password).collect();
    assert_eq!(dependents, vec![Field::PasswordConfirmation]);
    assert_eq!(SIGNUP.dependents_of(Field::Email).count(), 0);
}

// =============================================================
// FORGOT_PASSWORD
// =============================================================

#[test]
fn forgot_only_validates_email() {
    let fields: Vec<Field> = FORGOT_PASSWORD.field_names().collect();
    assert_eq!(fields, vec![Field::Email]);

    let values = FormValues { email: "nope".to_owned(), ..FormValues::default() };
    let errors = FORGOT_PASSWORD.validate(&values);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationKind::Format);
}
