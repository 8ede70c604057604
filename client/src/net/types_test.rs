use super::*;

#[test]
fn signup_request_serializes_camel_case() {
    let req = SignupRequest {
        first_name: "Ana".to_owned(),
        last_name: "Souza".to_owned(),
        email: "ana@teste.com".to_owned(),
        password: "123456Ab@".to_owned(),
        password_confirmation: "123456Ab@".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["firstName"], "Ana");
    assert_eq!(json["passwordConfirmation"], "123456Ab@");
}

#[test]
fn auth_result_omits_missing_session_tokens() {
    let result = AuthResult {
        user_id: "new-user-123".to_owned(),
        email: "a@b.co".to_owned(),
        onboarding_completed: false,
        session_tokens: None,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["onboardingCompleted"], false);
    assert!(json.get("sessionTokens").is_none());
}

#[test]
fn auth_result_parses_backend_shape_with_tokens() {
    let raw = r#"{"userId":"u1","email":"a@b.co","onboardingCompleted":true,
        "sessionTokens":{"access":"at","refresh":"rt"}}"#;
    let result: AuthResult = serde_json::from_str(raw).unwrap();
    assert_eq!(result.session_tokens.map(|t| t.access), Some("at".to_owned()));
}

#[test]
fn debug_output_never_contains_passwords() {
    let creds = Credentials { email: "a@b.co".to_owned(), password: "hunter2!".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.co"));
    assert!(!rendered.contains("hunter2!"));

    let values = FormValues {
        password: "hunter2!".to_owned(),
        password_confirmation: "hunter2!".to_owned(),
        ..FormValues::default()
    };
    assert!(!format!("{:?}", SignupRequest::from(&values)).contains("hunter2!"));
}

#[test]
fn submission_error_reason_codes() {
    assert_eq!(SubmissionError::InvalidCredentials.reason(), "INVALID_CREDENTIALS");
    assert_eq!(SubmissionError::EmailTaken.reason(), "EMAIL_TAKEN");
    assert_eq!(SubmissionError::Transport("x".to_owned()).reason(), "TRANSPORT");
    assert_eq!(SubmissionError::Unknown("x".to_owned()).reason(), "UNKNOWN");
}

#[test]
fn payloads_build_from_form_values() {
    let values = FormValues { email: "a@b.co".to_owned(), password: "pw".to_owned(), ..FormValues::default() };
    let creds = Credentials::from(&values);
    assert_eq!(creds.email, "a@b.co");
    assert_eq!(creds.password, "pw");
    assert_eq!(ForgotRequest::from(&values), ForgotRequest { email: "a@b.co".to_owned() });
}
