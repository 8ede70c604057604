//! E-mail + password login form.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::submit::submit_handler;
use crate::net::handlers::SimulatedLatency;
use crate::net::types::{AuthResult, Credentials, SessionTokens};
use crate::state::controller::{LoginController, SubmitOverride};
use crate::state::form::FormState;
use crate::state::mode::AuthMode;
use crate::state::toast::ToastState;
use crate::util::messages;
use crate::util::schema::{FormValues, LOGIN};
use crate::util::validation::Field;

#[component]
pub fn LoginForm(
    #[prop(optional)] defaults: Option<FormValues>,
    /// Replaces the success toast.
    #[prop(optional)]
    on_complete: Option<Callback<AuthResult>>,
    /// Fired with the session tokens of a successful login.
    #[prop(optional)]
    on_session_established: Option<Callback<SessionTokens>>,
    #[prop(optional)] on_switch_mode: Option<Callback<AuthMode>>,
    /// Replaces the built-in submission and its notifications; validation
    /// still runs first.
    #[prop(optional)]
    on_submit: Option<SubmitOverride<Credentials>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let latency = use_context::<SimulatedLatency>().unwrap_or_default();

    let form = RwSignal::new(FormState::with_defaults(&LOGIN, defaults.unwrap_or_default()));
    let busy = RwSignal::new(false);

    let mut controller = LoginController::login(latency.login_handler(), move |n| {
        toasts.update(|t| {
            t.push(n);
        });
    });
    if let Some(cb) = on_complete {
        controller = controller.with_on_complete(move |result: &AuthResult| cb.run(result.clone()));
    }
    if let Some(cb) = on_session_established {
        controller = controller.with_on_session_established(move |tokens: &SessionTokens| cb.run(tokens.clone()));
    }
    if let Some(f) = on_submit {
        controller = controller.with_shared_submit_override(f);
    }
    let on_submit = submit_handler(controller, form, busy);

    let forgot = AuthMode::Login.secondary_link();

    view! {
        <form class="auth-form" on:submit=on_submit novalidate=true>
            <FormField
                form=form
                field=Field::Email
                label="E-mail"
                input_type="email"
                placeholder="seu@email.com"
                autocomplete="email"
            />
            <FormField
                form=form
                field=Field::Password
                label="Senha"
                input_type="password"
                placeholder="********"
                autocomplete="current-password"
                hint=messages::PASSWORD_HINT
                revealable=true
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                {move || {
                    if busy.get() { AuthMode::Login.busy_label() } else { AuthMode::Login.submit_label() }
                }}
            </button>
            {forgot
                .map(|link| {
                    view! {
                        <div class="auth-form__secondary">
                            <button
                                type="button"
                                class="auth-link"
                                on:click=move |_| {
                                    if let Some(cb) = on_switch_mode {
                                        cb.run(link.target);
                                    }
                                }
                            >
                                {link.label}
                            </button>
                        </div>
                    }
                })}
        </form>
    }
}
