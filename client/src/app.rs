//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::handlers::SimulatedLatency;
use crate::pages::auth::AuthPage;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the notification queue and the mock handler latencies, then sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ToastState::default()));
    provide_context(SimulatedLatency::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/webidelivery.css"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("auth") view=AuthPage/>
            </Routes>
        </Router>
    }
}
