//! REST helpers for collaborators outside the auth screen.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): no request is made and the fallback value is returned.
//!
//! ERROR HANDLING
//! ==============
//! The availability check is advisory and fails open: any transport, status
//! or decode failure reports the address as available so an outage of the
//! check never blocks signup.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
#[cfg(any(test, feature = "hydrate"))]
use serde::Serialize;

pub const CHECK_EMAIL_ENDPOINT: &str = "/api/auth/check-email";

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq, Serialize)]
struct CheckEmailRequest {
    email: String,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct CheckEmailResponse {
    exists: bool,
}

#[cfg(any(test, feature = "hydrate"))]
fn check_email_request(email: &str) -> CheckEmailRequest {
    CheckEmailRequest { email: email.to_lowercase() }
}

fn availability_from(outcome: Result<CheckEmailResponse, String>) -> bool {
    match outcome {
        Ok(body) => !body.exists,
        Err(e) => {
            log::warn!("email availability check failed, assuming available: {e}");
            true
        }
    }
}

/// Ask the backend whether `email` is still free to register.
///
/// Returns `true` when the address is available or the check could not be
/// completed.
pub async fn check_email_unique(email: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        availability_from(post_check_email(&check_email_request(email)).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        availability_from(Err("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn post_check_email(payload: &CheckEmailRequest) -> Result<CheckEmailResponse, String> {
    let resp = gloo_net::http::Request::post(CHECK_EMAIL_ENDPOINT)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("check email failed: {}", resp.status()));
    }
    resp.json::<CheckEmailResponse>().await.map_err(|e| e.to_string())
}
