//! Student Panel
//!
//! Registration form and record list for students.

use leptos::*;

use crate::api;
use crate::components::fields::{SubmitButton, TenantSelect, TextField};
use crate::components::loading::ListSkeleton;
use crate::components::section::Section;
use crate::state::forms::Draft;
use crate::state::global::GlobalState;

#[component]
pub fn StudentPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = state.student_form;
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
            match api::create_student(
                &draft.tenant_id,
                &draft.student_number,
                &draft.first_name,
                &draft.last_name,
                &draft.grade_level,
            )
            .await
            {
                Ok(_) => {
                    form.set(Default::default());
                    state.show_success("Student registered");
                    state.refresh_all().await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to register student: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Section title="Register Student">
            <form on:submit=on_submit class="space-y-3">
                <div class="grid grid-cols-2 gap-3">
                    <TenantSelect
                        value=Signal::derive(move || form.get().tenant_id)
                        on_change=move |v| form.update(|f| f.tenant_id = v)
                    />
                    <TextField
                        placeholder="Student Number"
                        value=Signal::derive(move || form.get().student_number)
                        on_input=move |v| form.update(|f| f.student_number = v)
                    />
                    <TextField
                        placeholder="First Name"
                        value=Signal::derive(move || form.get().first_name)
                        on_input=move |v| form.update(|f| f.first_name = v)
                    />
                    <TextField
                        placeholder="Last Name"
                        value=Signal::derive(move || form.get().last_name)
                        on_input=move |v| form.update(|f| f.last_name = v)
                    />
                    <TextField
                        placeholder="Grade Level"
                        value=Signal::derive(move || form.get().grade_level)
                        on_input=move |v| form.update(|f| f.grade_level = v)
                    />
                </div>
                <SubmitButton label="Add Student" submitting=submitting />
            </form>

            <StudentList />
        </Section>
    }
}

#[component]
fn StudentList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let students = state.students;
    let loading = state.loading;

    view! {
        <div class="mt-4 max-h-44 overflow-auto text-sm">
            {move || {
                let records = students.get();
                if records.is_empty() {
                    if loading.get() {
                        return view! { <ListSkeleton /> }.into_view();
                    }
                    return view! {
                        <p class="text-gray-400 py-2">"No students yet"</p>
                    }.into_view();
                }

                records.into_iter().map(|student| {
                    let name = student.full_name();
                    let detail = format!("#{} • Grade {}", student.student_number, student.grade_level);
                    view! {
                        <div class="py-2 border-b border-gray-100">
                            <p class="font-medium text-gray-800">{name}</p>
                            <p class="text-xs text-gray-500">{detail}</p>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
