use tokio::time::Instant;

use super::*;

fn creds(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

fn signup(email: &str) -> SignupRequest {
    SignupRequest {
        first_name: "Ana".to_owned(),
        last_name: "Souza".to_owned(),
        email: email.to_owned(),
        password: "123456Ab@".to_owned(),
        password_confirmation: "123456Ab@".to_owned(),
    }
}

#[test]
fn default_latencies_match_constants() {
    let latency = SimulatedLatency::default();
    assert_eq!(latency.login, Duration::from_millis(1000));
    assert_eq!(latency.signup, Duration::from_millis(1200));
    assert_eq!(latency.forgot_password, Duration::from_millis(800));
    assert_eq!(latency.login_handler(), LoginHandler::default());
}

// =============================================================
// LoginHandler
// =============================================================

#[tokio::test(start_paused = true)]
async fn login_demo_credentials_succeed_after_delay() {
    let start = Instant::now();
    let result = LoginHandler::default().submit(creds(DEMO_EMAIL, DEMO_PASSWORD)).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert!(result.onboarding_completed);
    assert_eq!(result.email, DEMO_EMAIL);
    let tokens = result.session().expect("login must establish a session");
    assert!(!tokens.access.is_empty());
    assert!(!tokens.refresh.is_empty());
}

#[tokio::test(start_paused = true)]
async fn login_other_credentials_are_rejected() {
    let handler = LoginHandler::default();
    for (email, password) in [
        (DEMO_EMAIL, "123456Ab#"),
        ("outro@teste.com", DEMO_PASSWORD),
        ("TESTE@teste.com", DEMO_PASSWORD),
    ] {
        let err = handler.submit(creds(email, password)).await.unwrap_err();
        assert_eq!(err, SubmissionError::InvalidCredentials);
    }
}

// =============================================================
// SignupHandler
// =============================================================

#[tokio::test(start_paused = true)]
async fn signup_taken_email_conflicts() {
    let err = SignupHandler::default().submit(signup(TAKEN_EMAIL)).await.unwrap_err();
    assert_eq!(err, SubmissionError::EmailTaken);
}

#[tokio::test(start_paused = true)]
async fn signup_other_emails_succeed_without_onboarding() {
    let start = Instant::now();
    let handler = SignupHandler::default();
    for email in ["nova@teste.com", "outra@exemplo.com.br"] {
        let result = handler.submit(signup(email)).await.unwrap();
        assert!(!result.onboarding_completed);
        assert_eq!(result.email, email);
        assert!(result.session().is_none());
    }
    assert!(start.elapsed() >= Duration::from_millis(2400));
}

// =============================================================
// ForgotPasswordHandler
// =============================================================

#[tokio::test(start_paused = true)]
async fn forgot_password_always_reports_sent() {
    let start = Instant::now();
    let handler = ForgotPasswordHandler::default();
    let registered = handler.submit(ForgotRequest { email: DEMO_EMAIL.to_owned() }).await.unwrap();
    let unknown = handler.submit(ForgotRequest { email: "ninguem@teste.com".to_owned() }).await.unwrap();

    assert!(registered.sent);
    assert_eq!(registered, unknown);
    assert!(start.elapsed() >= Duration::from_millis(1600));
}

#[tokio::test(start_paused = true)]
async fn custom_latency_is_honored() {
    let handler = LoginHandler { latency: Duration::from_millis(5) };
    let start = Instant::now();
    let _ = handler.submit(creds("a@b.co", "x")).await;
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(5));
    assert!(elapsed < Duration::from_millis(1000));
}
