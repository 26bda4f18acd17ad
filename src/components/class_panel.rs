//! Class Panel
//!
//! Creation form and record list for classes.

use leptos::*;

use crate::api;
use crate::components::fields::{SubmitButton, TenantSelect, TextField};
use crate::components::loading::ListSkeleton;
use crate::components::section::Section;
use crate::state::forms::Draft;
use crate::state::global::GlobalState;

#[component]
pub fn ClassPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = state.class_form;
    let (submitting, set_submitting) = create_signal(false);

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = form.get();
        if !draft.is_complete() {
            return;
        }

        set_submitting.set(true);

        let state = submit_state.clone();
        spawn_local(async move {
            match api::create_class(
                &draft.tenant_id,
                &draft.name,
                &draft.code,
                &draft.subject,
                &draft.grade_level,
            )
            .await
            {
                Ok(_) => {
                    form.set(Default::default());
                    state.show_success("Class created");
                    state.refresh_all().await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to create class: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Section title="Create Class">
            <form on:submit=on_submit class="space-y-3">
                <div class="grid grid-cols-2 gap-3">
                    <TenantSelect
                        value=Signal::derive(move || form.get().tenant_id)
                        on_change=move |v| form.update(|f| f.tenant_id = v)
                    />
                    <TextField
                        placeholder="Name"
                        value=Signal::derive(move || form.get().name)
                        on_input=move |v| form.update(|f| f.name = v)
                    />
                    <TextField
                        placeholder="Code"
                        value=Signal::derive(move || form.get().code)
                        on_input=move |v| form.update(|f| f.code = v)
                    />
                    <TextField
                        placeholder="Subject"
                        value=Signal::derive(move || form.get().subject)
                        on_input=move |v| form.update(|f| f.subject = v)
                    />
                    <TextField
                        placeholder="Grade Level"
                        value=Signal::derive(move || form.get().grade_level)
                        on_input=move |v| form.update(|f| f.grade_level = v)
                    />
                </div>
                <SubmitButton label="Add Class" submitting=submitting />
            </form>

            <ClassList />
        </Section>
    }
}

#[component]
fn ClassList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let classes = state.classes;
    let loading = state.loading;

    view! {
        <div class="mt-4 max-h-44 overflow-auto text-sm">
            {move || {
                let records = classes.get();
                if records.is_empty() {
                    if loading.get() {
                        return view! { <ListSkeleton /> }.into_view();
                    }
                    return view! {
                        <p class="text-gray-400 py-2">"No classes yet"</p>
                    }.into_view();
                }

                records.into_iter().map(|class| {
                    let heading = format!("{} • {}", class.name, class.subject);
                    let detail = format!("Code: {} • Grade: {}", class.code, class.grade_level);
                    view! {
                        <div class="py-2 border-b border-gray-100">
                            <p class="font-medium text-gray-800">{heading}</p>
                            <p class="text-xs text-gray-500">{detail}</p>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
