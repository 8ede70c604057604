//! Submission handlers for the three authentication forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form controllers only see the `SubmissionHandler` trait. The handlers here
//! simulate the network round trip with a fixed delay and hard-coded
//! responses; a real backend client implements the same trait with the same
//! payload, success and failure shapes.
//!
//! TRADE-OFFS
//! ==========
//! There is no cancellation or timeout: a pending submission always resolves
//! once its simulated delay elapses.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

use std::future::Future;
use std::time::Duration;

use super::types::{AuthResult, Credentials, ForgotRequest, ForgotResult, SessionTokens, SignupRequest, SubmissionError};
use crate::util::messages;

pub const DEFAULT_LOGIN_LATENCY_MS: u64 = 1000;
pub const DEFAULT_SIGNUP_LATENCY_MS: u64 = 1200;
pub const DEFAULT_FORGOT_LATENCY_MS: u64 = 800;

/// The only credential pair the simulated login accepts.
pub const DEMO_EMAIL: &str = "teste@teste.com";
pub const DEMO_PASSWORD: &str = "123456Ab@";

/// The address the simulated signup treats as already registered.
pub const TAKEN_EMAIL: &str = "existente@teste.com";

/// Boundary between a form controller and whatever performs the request.
pub trait SubmissionHandler {
    type Payload;
    type Success;

    fn submit(&self, payload: Self::Payload) -> impl Future<Output = Result<Self::Success, SubmissionError>>;
}

/// Success payloads that may carry an established session.
pub trait SessionSource {
    fn session(&self) -> Option<&SessionTokens> {
        None
    }
}

impl SessionSource for AuthResult {
    fn session(&self) -> Option<&SessionTokens> {
        self.session_tokens.as_ref()
    }
}

impl SessionSource for ForgotResult {}

/// Simulated latency per handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub login: Duration,
    pub signup: Duration,
    pub forgot_password: Duration,
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(DEFAULT_LOGIN_LATENCY_MS),
            signup: Duration::from_millis(DEFAULT_SIGNUP_LATENCY_MS),
            forgot_password: Duration::from_millis(DEFAULT_FORGOT_LATENCY_MS),
        }
    }
}

async fn simulate_latency(delay: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(feature = "hydrate"))]
    tokio::time::sleep(delay).await;
}

/// Simulated login: succeeds only for the demo credential pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginHandler {
    pub latency: Duration,
}

impl Default for LoginHandler {
    fn default() -> Self {
        Self { latency: SimulatedLatency::default().login }
    }
}

impl SubmissionHandler for LoginHandler {
    type Payload = Credentials;
    type Success = AuthResult;

    async fn submit(&self, payload: Credentials) -> Result<AuthResult, SubmissionError> {
        simulate_latency(self.latency).await;

        if payload.email != DEMO_EMAIL || payload.password != DEMO_PASSWORD {
            return Err(SubmissionError::InvalidCredentials);
        }
        Ok(AuthResult {
            user_id: "user-123".to_owned(),
            email: payload.email,
            onboarding_completed: true,
            session_tokens: Some(SessionTokens {
                access: "mock-token".to_owned(),
                refresh: "mock-refresh".to_owned(),
            }),
        })
    }
}

/// Simulated signup: rejects the one registered address, accepts the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignupHandler {
    pub latency: Duration,
}

impl Default for SignupHandler {
    fn default() -> Self {
        Self { latency: SimulatedLatency::default().signup }
    }
}

impl SubmissionHandler for SignupHandler {
    type Payload = SignupRequest;
    type Success = AuthResult;

    async fn submit(&self, payload: SignupRequest) -> Result<AuthResult, SubmissionError> {
        simulate_latency(self.latency).await;

        if payload.email == TAKEN_EMAIL {
            return Err(SubmissionError::EmailTaken);
        }
        Ok(AuthResult {
            user_id: "new-user-123".to_owned(),
            email: payload.email,
            onboarding_completed: false,
            session_tokens: None,
        })
    }
}

/// Simulated password reset request. Always reports success so the response
/// never reveals whether an address is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForgotPasswordHandler {
    pub latency: Duration,
}

impl Default for ForgotPasswordHandler {
    fn default() -> Self {
        Self { latency: SimulatedLatency::default().forgot_password }
    }
}

impl SubmissionHandler for ForgotPasswordHandler {
    type Payload = ForgotRequest;
    type Success = ForgotResult;

    async fn submit(&self, _payload: ForgotRequest) -> Result<ForgotResult, SubmissionError> {
        simulate_latency(self.latency).await;

        Ok(ForgotResult { sent: true, message: messages::FORGOT_PASSWORD_SENT_DETAIL.to_owned() })
    }
}

impl SimulatedLatency {
    pub fn login_handler(self) -> LoginHandler {
        LoginHandler { latency: self.login }
    }

    pub fn signup_handler(self) -> SignupHandler {
        SignupHandler { latency: self.signup }
    }

    pub fn forgot_password_handler(self) -> ForgotPasswordHandler {
        ForgotPasswordHandler { latency: self.forgot_password }
    }
}
