//! Footer link switching between authentication modes.

use leptos::prelude::*;

use crate::state::mode::AuthMode;

/// Renders the "switch mode" prompt for `mode` and reports the target mode
/// through `on_switch`. The `href` keeps the link usable before hydration.
#[component]
pub fn ModeNav(mode: AuthMode, on_switch: Callback<AuthMode>) -> impl IntoView {
    let link = mode.switch_link();

    view! {
        <p class="auth-card__switch">
            <span class="auth-card__switch-prompt">{link.prompt}</span>
            " "
            <a
                class="auth-link"
                href=link.target.href()
                on:click=move |ev| {
                    ev.prevent_default();
                    on_switch.run(link.target);
                }
            >
                {link.label}
            </a>
        </p>
    }
}
