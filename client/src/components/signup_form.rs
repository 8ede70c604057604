//! Account creation form.
//!
//! The e-mail field runs an advisory availability check on blur. A taken
//! address only produces a notice; the signup handler remains the authority.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::submit::submit_handler;
use crate::net::handlers::SimulatedLatency;
use crate::net::types::{AuthResult, SignupRequest};
use crate::state::availability::EmailNotice;
use crate::state::controller::{SignupController, SubmitOverride};
use crate::state::form::FormState;
use crate::state::mode::AuthMode;
use crate::state::toast::ToastState;
use crate::util::messages;
use crate::util::schema::{FormValues, SIGNUP};
use crate::util::validation::{Field, is_email_shaped};

#[component]
pub fn SignupForm(
    #[prop(optional)] defaults: Option<FormValues>,
    /// Replaces the success toast.
    #[prop(optional)]
    on_complete: Option<Callback<AuthResult>>,
    /// Replaces the built-in submission and its notifications; validation
    /// still runs first.
    #[prop(optional)]
    on_submit: Option<SubmitOverride<SignupRequest>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let latency = use_context::<SimulatedLatency>().unwrap_or_default();

    let form = RwSignal::new(FormState::with_defaults(&SIGNUP, defaults.unwrap_or_default()));
    let busy = RwSignal::new(false);
    let email_notice = RwSignal::new(EmailNotice::default());

    let mut controller = SignupController::signup(latency.signup_handler(), move |n| {
        toasts.update(|t| {
            t.push(n);
        });
    });
    if let Some(cb) = on_complete {
        controller = controller.with_on_complete(move |result: &AuthResult| cb.run(result.clone()));
    }
    if let Some(f) = on_submit {
        controller = controller.with_shared_submit_override(f);
    }
    let on_submit = submit_handler(controller, form, busy);

    let on_email_blur = Callback::new(move |()| {
        let email = form.with_untracked(|f| f.values.email.clone());
        if !is_email_shaped(&email) {
            email_notice.update(EmailNotice::clear);
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let available = crate::net::api::check_email_unique(&email).await;
            let current = form.with_untracked(|f| f.values.email.clone());
            email_notice.update(|n| n.resolve(&email, &current, available));
        });
    });

    view! {
        <form class="auth-form" on:submit=on_submit novalidate=true>
            <div class="auth-form__row">
                <FormField
                    form=form
                    field=Field::FirstName
                    label="Nome"
                    placeholder="Seu nome"
                    autocomplete="given-name"
                />
                <FormField
                    form=form
                    field=Field::LastName
                    label="Sobrenome"
                    placeholder="Seu sobrenome"
                    autocomplete="family-name"
                />
            </div>
            <FormField
                form=form
                field=Field::Email
                label="E-mail"
                input_type="email"
                placeholder="seu@email.com"
                autocomplete="email"
                on_blur=on_email_blur
            />
            <Show when=move || form.with(|f| email_notice.with(|n| n.is_taken(&f.values.email)))>
                <p class="auth-field__notice">{messages::AUTH_EMAIL_EXISTS}</p>
            </Show>
            <FormField
                form=form
                field=Field::Password
                label="Senha"
                input_type="password"
                placeholder="********"
                autocomplete="new-password"
                hint=messages::PASSWORD_HINT
                revealable=true
            />
            <FormField
                form=form
                field=Field::PasswordConfirmation
                label="Confirmar Senha"
                input_type="password"
                placeholder="********"
                autocomplete="new-password"
                revealable=true
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                {move || {
                    if busy.get() { AuthMode::Signup.busy_label() } else { AuthMode::Signup.submit_label() }
                }}
            </button>
        </form>
    }
}
