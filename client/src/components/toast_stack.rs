//! Floating stack of submission notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form controllers push into the shared `ToastState` signal; this component
//! renders the queue and expires each toast after a fixed delay in the browser.

use leptos::prelude::*;

use crate::state::toast::{NotificationKind, ToastState};

/// How long a toast stays visible before it is dismissed automatically.
pub const TOAST_TTL_MS: u32 = 4_000;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(id) = toasts.with(|t| t.latest().map(|toast| toast.id)) else {
            return;
        };
        gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
            toasts.update(|t| t.dismiss(id));
        })
        .forget();
    });

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind_class = match toast.notification.kind {
                            NotificationKind::Success => "toast toast--success",
                            NotificationKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=kind_class>
                                <span class="toast__text">{toast.notification.text}</span>
                                <button
                                    type="button"
                                    class="toast__dismiss"
                                    aria-label="Fechar"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
