//! Labeled input bound to one field of a `FormState` signal.
//!
//! Errors render only once the field is touched; until then the optional
//! hint is shown in their place.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::form::FormState;
use crate::util::validation::Field;

#[component]
pub fn FormField(
    form: RwSignal<FormState>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
    #[prop(optional)] revealable: bool,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let id = format!("auth-{}", field.as_str());

    let error = move || form.with(|f| f.visible_error(field).map(|e| e.message.clone()));
    let current_type = move || if revealable && revealed.get() { "text" } else { input_type };

    view! {
        <div class="auth-field">
            <label class="auth-field__label" for=id.clone()>
                {label}
            </label>
            <div class="auth-field__control">
                <input
                    id=id
                    class="auth-input"
                    class:auth-input--invalid=move || error().is_some()
                    name=field.as_str()
                    type=current_type
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || form.with(|f| f.values.get(field).to_owned())
                    on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                    on:blur=move |_| {
                        form.update(|f| f.touch(field));
                        if let Some(cb) = on_blur {
                            cb.run(());
                        }
                    }
                />
                <Show when=move || revealable>
                    <button
                        type="button"
                        class="auth-field__reveal"
                        on:click=move |_| revealed.update(|r| *r = !*r)
                    >
                        {move || if revealed.get() { "Ocultar" } else { "Mostrar" }}
                    </button>
                </Show>
            </div>
            {move || match error() {
                Some(message) => view! { <p class="auth-field__error">{message}</p> }.into_any(),
                None => match hint {
                    Some(text) => view! { <p class="auth-field__hint">{text}</p> }.into_any(),
                    None => ().into_any(),
                },
            }}
        </div>
    }
}
