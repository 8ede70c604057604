//! Authentication screen routed by the `?mode=` query parameter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The query string is the single source of truth for which form is shown.
//! Switching modes replaces the current history entry, and each form is
//! rebuilt on switch so no field values carry across modes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::forgot_form::ForgotForm;
use crate::components::login_form::LoginForm;
use crate::components::mode_nav::ModeNav;
use crate::components::signup_form::SignupForm;
use crate::components::toast_stack::ToastStack;
use crate::net::types::SessionTokens;
use crate::state::mode::{AuthMode, MODE_PARAM};

#[component]
pub fn AuthPage() -> impl IntoView {
    let query = use_query_map();
    let mode = Memo::new(move |_| query.with(|q| AuthMode::from_query(q.get(MODE_PARAM).as_deref())));

    let navigate = use_navigate();
    let on_switch = Callback::new(move |target: AuthMode| {
        navigate(&target.href(), NavigateOptions { replace: true, ..Default::default() });
    });

    let on_session = Callback::new(|_tokens: SessionTokens| {
        log::info!("auth: session established");
    });

    let form = move || match mode.get() {
        AuthMode::Login => {
            view! { <LoginForm on_session_established=on_session on_switch_mode=on_switch/> }.into_any()
        }
        AuthMode::Signup => view! { <SignupForm/> }.into_any(),
        AuthMode::ForgotPassword => view! { <ForgotForm/> }.into_any(),
    };

    view! {
        <Title text=move || mode.get().title()/>
        <div class="auth-page">
            <header class="auth-brand">
                <h1 class="auth-brand__name">"WebiDelivery"</h1>
                <p class="auth-brand__tagline">"Sua plataforma de delivery"</p>
            </header>
            <section class="auth-card">
                <h2 class="auth-card__title">{move || mode.get().title()}</h2>
                <p class="auth-card__description">{move || mode.get().description()}</p>
                {form}
                {move || view! { <ModeNav mode=mode.get() on_switch=on_switch/> }}
            </section>
            <ToastStack/>
        </div>
    }
}
