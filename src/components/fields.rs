//! Shared Form Fields
//!
//! Text inputs, foreign-key selects and the submit button used by the
//! entity panels.

use leptos::*;

use crate::state::global::GlobalState;

/// Single-line input bound to one draft field
#[component]
pub fn TextField(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: impl Fn(String) + 'static,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input(event_target_value(&ev))
            class="input"
        />
    }
}

/// Tenant foreign-key selector fed from the loaded tenant collection
#[component]
pub fn TenantSelect(
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let tenants = state.tenants;

    view! {
        <select
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
            class="input"
        >
            <option value="">"Select Tenant"</option>
            {move || {
                tenants.get().into_iter().map(|tenant| view! {
                    <option value=tenant.id.clone()>{tenant.name}</option>
                }).collect_view()
            }}
        </select>
    }
}

/// Student foreign-key selector fed from the loaded student collection
#[component]
pub fn StudentSelect(
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let students = state.students;

    view! {
        <select
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
            class="input"
        >
            <option value="">"Select Student"</option>
            {move || {
                students.get().into_iter().map(|student| {
                    let name = student.full_name();
                    view! {
                        <option value=student.id.clone()>{name}</option>
                    }
                }).collect_view()
            }}
        </select>
    }
}

/// Submit button with in-flight spinner state
#[component]
pub fn SubmitButton(
    label: &'static str,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    view! {
        <button type="submit" disabled=move || submitting.get() class="btn-primary">
            {move || if submitting.get() {
                view! {
                    <div class="loading-spinner w-4 h-4" />
                    <span>"Saving..."</span>
                }.into_view()
            } else {
                view! { <span>{label}</span> }.into_view()
            }}
        </button>
    }
}
