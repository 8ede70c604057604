use super::*;

#[test]
fn check_email_request_lowercases_address() {
    assert_eq!(check_email_request("Ana@Teste.COM"), CheckEmailRequest { email: "ana@teste.com".to_owned() });
}

#[test]
fn check_email_request_serializes_email_key() {
    let json = serde_json::to_value(check_email_request("a@b.co")).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.co" }));
}

#[test]
fn availability_inverts_exists_flag() {
    let taken: CheckEmailResponse = serde_json::from_str(r#"{"exists":true}"#).unwrap();
    let free: CheckEmailResponse = serde_json::from_str(r#"{"exists":false}"#).unwrap();
    assert!(!availability_from(Ok(taken)));
    assert!(availability_from(Ok(free)));
}

#[test]
fn availability_fails_open_on_error() {
    assert!(availability_from(Err("check email failed: 503".to_owned())));
}

#[tokio::test]
async fn check_without_browser_reports_available() {
    assert!(check_email_unique("existente@teste.com").await);
}
