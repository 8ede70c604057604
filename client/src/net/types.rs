//! Request/response DTOs for the authentication submission boundary.
//!
//! DESIGN
//! ======
//! These shapes are the contract a real backend client must honor when it
//! replaces the simulated handlers: payloads serialize with camelCase keys,
//! and failures are reported through the named `SubmissionError` variants.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::schema::FormValues;

/// Login payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup payload. `password == password_confirmation` is checked by the
/// signup schema before one of these is built.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Forgot-password payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotRequest {
    pub email: String,
}

/// Session token pair issued on login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}

/// Successful login/signup result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub user_id: String,
    pub email: String,
    pub onboarding_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_tokens: Option<SessionTokens>,
}

/// Successful forgot-password result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotResult {
    pub sent: bool,
    pub message: String,
}

/// Named submission failure reasons.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unknown failure: {0}")]
    Unknown(String),
}

impl SubmissionError {
    /// Stable reason code for logs and backend contracts.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Transport(_) => "TRANSPORT",
            Self::Unknown(_) => "UNKNOWN",
        }
    }
}

// Passwords never reach log output through `{:?}`.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<&FormValues> for Credentials {
    fn from(values: &FormValues) -> Self {
        Self { email: values.email.clone(), password: values.password.clone() }
    }
}

impl From<&FormValues> for SignupRequest {
    fn from(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            password_confirmation: values.password_confirmation.clone(),
        }
    }
}

impl From<&FormValues> for ForgotRequest {
    fn from(values: &FormValues) -> Self {
        Self { email: values.email.clone() }
    }
}
