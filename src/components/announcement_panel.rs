//! Announcement Panel
//!
//! Publish form and record list for announcements.

use leptos::*;

use crate::api;
use crate::components::fields::{SubmitButton, TenantSelect, TextField};
use crate::components::loading::ListSkeleton;
use crate::components::section::Section;
use crate::state::forms::Draft;
use crate::state::global::GlobalState;

#[component]
pub fn AnnouncementPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = state.announcement_form;
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
            match api::create_announcement(&draft.tenant_id, &draft.title, &draft.message).await {
                Ok(_) => {
                    form.set(Default::default());
                    state.show_success("Announcement published");
                    state.refresh_all().await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to publish announcement: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Section title="Announcements">
            <form on:submit=on_submit class="space-y-3">
                <div class="grid grid-cols-2 gap-3">
                    <TenantSelect
                        value=Signal::derive(move || form.get().tenant_id)
                        on_change=move |v| form.update(|f| f.tenant_id = v)
                    />
                    <TextField
                        placeholder="Title"
                        value=Signal::derive(move || form.get().title)
                        on_input=move |v| form.update(|f| f.title = v)
                    />
                    <div class="col-span-2">
                        <TextField
                            placeholder="Message"
                            value=Signal::derive(move || form.get().message)
                            on_input=move |v| form.update(|f| f.message = v)
                        />
                    </div>
                </div>
                <SubmitButton label="Publish" submitting=submitting />
            </form>

            <AnnouncementList />
        </Section>
    }
}

#[component]
fn AnnouncementList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let announcements = state.announcements;
    let loading = state.loading;

    view! {
        <div class="mt-4 max-h-44 overflow-auto text-sm">
            {move || {
                let records = announcements.get();
                if records.is_empty() {
                    if loading.get() {
                        return view! { <ListSkeleton /> }.into_view();
                    }
                    return view! {
                        <p class="text-gray-400 py-2">"No announcements yet"</p>
                    }.into_view();
                }

                records.into_iter().map(|announcement| view! {
                    <div class="py-2 border-b border-gray-100">
                        <p class="font-medium text-gray-800">{announcement.title}</p>
                        <p class="text-xs text-gray-500">{announcement.message}</p>
                    </div>
                }).collect_view()
            }}
        </div>
    }
}
