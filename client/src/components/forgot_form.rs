//! Password recovery request form.

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::submit::submit_handler;
use crate::net::handlers::SimulatedLatency;
use crate::net::types::{ForgotRequest, ForgotResult};
use crate::state::controller::{ForgotPasswordController, SubmitOverride};
use crate::state::form::FormState;
use crate::state::mode::AuthMode;
use crate::state::toast::ToastState;
use crate::util::schema::{FORGOT_PASSWORD, FormValues};
use crate::util::validation::Field;

#[component]
pub fn ForgotForm(
    #[prop(optional)] defaults: Option<FormValues>,
    #[prop(optional)] on_complete: Option<Callback<ForgotResult>>,
    /// Replaces the built-in submission and its notifications; validation
    /// still runs first.
    #[prop(optional)]
    on_submit: Option<SubmitOverride<ForgotRequest>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let latency = use_context::<SimulatedLatency>().unwrap_or_default();

    let form = RwSignal::new(FormState::with_defaults(&FORGOT_PASSWORD, defaults.unwrap_or_default()));
    let busy = RwSignal::new(false);

    let mut controller = ForgotPasswordController::forgot_password(latency.forgot_password_handler(), move |n| {
        toasts.update(|t| {
            t.push(n);
        });
    });
    if let Some(cb) = on_complete {
        controller = controller.with_on_complete(move |result: &ForgotResult| cb.run(result.clone()));
    }
    if let Some(f) = on_submit {
        controller = controller.with_shared_submit_override(f);
    }
    let on_submit = submit_handler(controller, form, busy);

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
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                {move || {
                    if busy.get() {
                        AuthMode::ForgotPassword.busy_label()
                    } else {
                        AuthMode::ForgotPassword.submit_label()
                    }
                }}
            </button>
        </form>
    }
}
