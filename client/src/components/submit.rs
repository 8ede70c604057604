//! Shared submit wiring for the authentication forms.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;

use crate::net::handlers::{SessionSource, SubmissionHandler};
use crate::state::controller::FormController;
use crate::state::form::FormState;
use crate::util::schema::FormValues;

/// Build an `on:submit` handler that reveals every field error, then hands
/// valid values to `controller` on a local task.
///
/// `busy` mirrors the controller's pending flag so the submit button can be
/// disabled reactively.
pub(crate) fn submit_handler<H>(
    controller: FormController<H>,
    form: RwSignal<FormState>,
    busy: RwSignal<bool>,
) -> impl Fn(leptos::ev::SubmitEvent) + Clone + 'static
where
    H: SubmissionHandler + Send + Sync + 'static,
    H::Payload: for<'a> From<&'a FormValues> + 'static,
    H::Success: SessionSource + 'static,
{
    move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || controller.is_pending() {
            return;
        }
        if !reveal_errors(form) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let values = form.with_untracked(|f| f.values.clone());
            let controller = controller.clone();
            busy.set(true);
            leptos::task::spawn_local(async move {
                controller.submit(&values).await;
                busy.set(false);
            });
        }
    }
}

/// Mark every field touched so all errors render. Returns whether the form
/// is valid.
fn reveal_errors(form: RwSignal<FormState>) -> bool {
    let mut valid = false;
    form.update(|f| valid = f.validate_all().is_ok());
    valid
}
