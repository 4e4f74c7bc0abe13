//! Labeled form input with an attached field error

use leptos::prelude::*;

/// Text input bound to a signal, showing the field's current error below it.
#[component]
pub fn TextField(
    /// Visible label.
    label: &'static str,
    /// HTML input type.
    #[prop(default = "text")]
    input_type: &'static str,
    /// Field value; written on every keystroke.
    value: RwSignal<String>,
    /// Current validation or domain error; empty when the field is valid.
    #[prop(into)]
    error: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">{label}</label>
            <input
                type=input_type
                class=move || {
                    if error.get().is_empty() {
                        "field-input"
                    } else {
                        "field-input field-input-invalid"
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !error.get().is_empty()>
                <p class="field-error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
