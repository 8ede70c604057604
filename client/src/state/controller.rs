//! Form controllers: validate, submit once, report.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller backs each mounted authentication form. It owns the
//! pending flag that disables the submit action, runs the mode's schema
//! before anything leaves the form, drives the `SubmissionHandler`, and turns
//! the outcome into a notification or a caller callback.
//!
//! DESIGN
//! ======
//! `idle -> submitting -> idle`. The pending flag is claimed before the
//! handler is awaited and released by a drop guard, so a dropped submission
//! future also returns the controller to idle. Submission failures are
//! always caught here and never propagate to the caller as panics or
//! unhandled errors; the caller gets a `SubmitOutcome`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::mode::AuthMode;
use super::toast::Notification;
use crate::net::handlers::{ForgotPasswordHandler, LoginHandler, SessionSource, SignupHandler, SubmissionHandler};
use crate::net::types::{SessionTokens, SubmissionError};
use crate::util::schema::FormValues;
use crate::util::validation::ValidationError;

pub type NotificationSink = Arc<dyn Fn(Notification) + Send + Sync>;
pub type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;
pub type SubmitOverride<P> = Arc<dyn Fn(P) -> LocalBoxFuture<'static, Result<(), SubmissionError>> + Send + Sync>;

pub type LoginController = FormController<LoginHandler>;
pub type SignupController = FormController<SignupHandler>;
pub type ForgotPasswordController = FormController<ForgotPasswordHandler>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Result of a single `submit` call.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome<T> {
    /// A submission was already in flight; nothing happened.
    Ignored,
    /// Validation failed; the handler was not called.
    Invalid(Vec<ValidationError>),
    /// The built-in handler succeeded.
    Succeeded(T),
    /// The caller's override ran and succeeded.
    Overridden,
    /// The handler or override failed; an error notification was emitted.
    Failed(SubmissionError),
}

pub struct FormController<H: SubmissionHandler> {
    mode: AuthMode,
    handler: Arc<H>,
    pending: Arc<AtomicBool>,
    notify: NotificationSink,
    on_complete: Option<Observer<H::Success>>,
    on_session_established: Option<Observer<SessionTokens>>,
    on_submit: Option<SubmitOverride<H::Payload>>,
}

impl<H: SubmissionHandler> Clone for FormController<H> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            handler: Arc::clone(&self.handler),
            pending: Arc::clone(&self.pending),
            notify: Arc::clone(&self.notify),
            on_complete: self.on_complete.clone(),
            on_session_established: self.on_session_established.clone(),
            on_submit: self.on_submit.clone(),
        }
    }
}

impl<H: SubmissionHandler> std::fmt::Debug for FormController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("mode", &self.mode)
            .field("phase", &self.phase())
            .field("has_on_complete", &self.on_complete.is_some())
            .field("has_override", &self.on_submit.is_some())
            .finish_non_exhaustive()
    }
}

impl LoginController {
    pub fn login(handler: LoginHandler, notify: impl Fn(Notification) + Send + Sync + 'static) -> Self {
        Self::new(AuthMode::Login, handler, notify)
    }
}

impl SignupController {
    pub fn signup(handler: SignupHandler, notify: impl Fn(Notification) + Send + Sync + 'static) -> Self {
        Self::new(AuthMode::Signup, handler, notify)
    }
}

impl ForgotPasswordController {
    pub fn forgot_password(
        handler: ForgotPasswordHandler,
        notify: impl Fn(Notification) + Send + Sync + 'static,
    ) -> Self {
        Self::new(AuthMode::ForgotPassword, handler, notify)
    }
}

impl<H: SubmissionHandler> FormController<H> {
    /// Bind `handler` to `mode`'s schema and copy. Notifications go to `notify`.
    pub fn new(mode: AuthMode, handler: H, notify: impl Fn(Notification) + Send + Sync + 'static) -> Self {
        Self {
            mode,
            handler: Arc::new(handler),
            pending: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(notify),
            on_complete: None,
            on_session_established: None,
            on_submit: None,
        }
    }

    /// Call `f` on success instead of emitting the success notification.
    #[must_use]
    pub fn with_on_complete(mut self, f: impl Fn(&H::Success) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(f));
        self
    }

    /// Observe sessions established by a successful submission.
    #[must_use]
    pub fn with_on_session_established(mut self, f: impl Fn(&SessionTokens) + Send + Sync + 'static) -> Self {
        self.on_session_established = Some(Arc::new(f));
        self
    }

    /// Replace the built-in handler call and its notifications with `f`.
    /// Validation still runs first; a failure from `f` is reported like a
    /// handler failure.
    #[must_use]
    pub fn with_submit_override<F, Fut>(mut self, f: F) -> Self
    where
        H: 'static,
        F: Fn(H::Payload) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SubmissionError>> + 'static,
    {
        self.with_shared_submit_override(Arc::new(
            move |payload: H::Payload| -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
                f(payload).boxed_local()
            },
        ))
    }

    /// Same as [`FormController::with_submit_override`] for an override that
    /// is already shared, as handed down through component props.
    #[must_use]
    pub fn with_shared_submit_override(mut self, f: SubmitOverride<H::Payload>) -> Self {
        self.on_submit = Some(f);
        self
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        if self.pending.load(Ordering::Acquire) { Phase::Submitting } else { Phase::Idle }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Phase::Submitting
    }

    /// Validate `values` and, if they pass and nothing is in flight, submit.
    pub async fn submit(&self, values: &FormValues) -> SubmitOutcome<H::Success>
    where
        H::Payload: for<'a> From<&'a FormValues>,
        H::Success: SessionSource,
    {
        if self.is_pending() {
            log::debug!("{} submit ignored: request already in flight", self.mode.as_str());
            return SubmitOutcome::Ignored;
        }

        let errors = self.mode.schema().validate(values);
        if !errors.is_empty() {
            log::debug!("{} submit blocked by {} validation error(s)", self.mode.as_str(), errors.len());
            return SubmitOutcome::Invalid(errors);
        }

        let Some(_guard) = PendingGuard::claim(&self.pending) else {
            return SubmitOutcome::Ignored;
        };
        let payload = H::Payload::from(values);

        if let Some(on_submit) = &self.on_submit {
            return match on_submit(payload).await {
                Ok(()) => SubmitOutcome::Overridden,
                Err(err) => self.fail(err),
            };
        }

        log::info!("{} submission started", self.mode.as_str());
        match self.handler.submit(payload).await {
            Ok(success) => {
                log::info!("{} submission succeeded", self.mode.as_str());
                if let (Some(observer), Some(tokens)) = (&self.on_session_established, success.session()) {
                    observer(tokens);
                }
                match &self.on_complete {
                    Some(on_complete) => on_complete(&success),
                    None => (self.notify)(Notification::success(self.mode.success_message())),
                }
                SubmitOutcome::Succeeded(success)
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: SubmissionError) -> SubmitOutcome<H::Success> {
        log::warn!("{} submission failed: {}", self.mode.as_str(), err.reason());
        (self.notify)(Notification::error(self.mode.failure_message(&err)));
        SubmitOutcome::Failed(err)
    }
}

/// Holds the pending flag for the lifetime of one submission.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
