use super::*;
use crate::util::messages;
use crate::util::schema::LOGIN;
use crate::util::validation::Field;

#[test]
fn reveal_errors_touches_untouched_fields_of_invalid_form() {
    let form = RwSignal::new(FormState::new(&LOGIN));

    assert!(!reveal_errors(form));
    form.with_untracked(|f| {
        assert_eq!(f.visible_error(Field::Email).map(|e| e.message.as_str()), Some(messages::EMAIL_REQUIRED));
        assert!(f.visible_error(Field::Password).is_some());
    });
}

#[test]
fn reveal_errors_accepts_valid_form_and_keeps_values() {
    let form = RwSignal::new(FormState::new(&LOGIN));
    form.update(|f| {
        f.set_value(Field::Email, "teste@teste.com");
        f.set_value(Field::Password, "123456Ab@");
    });

    assert!(reveal_errors(form));
    form.with_untracked(|f| {
        assert_eq!(f.values.email, "teste@teste.com");
        assert!(f.visible_error(Field::Email).is_none());
    });
}
