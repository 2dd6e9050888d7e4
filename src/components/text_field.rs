//! Text Field Component
//!
//! Labelled single-line input bound to a signal.

use leptos::prelude::*;

/// Labelled `<input type="text">`
///
/// # Arguments
/// * `id` - DOM id; the label's `for` points at it
/// * `label` - visible label text
/// * `placeholder` - hint shown while empty
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-row">
            <label for=id.clone()>{label}</label>
            <input
                type="text"
                id=id
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}
