//! Tenant Panel
//!
//! Creation form and record list for tenants.

use leptos::*;

use crate::api;
use crate::components::fields::{SubmitButton, TextField};
use crate::components::loading::ListSkeleton;
use crate::components::section::Section;
use crate::state::forms::Draft;
use crate::state::global::GlobalState;

#[component]
pub fn TenantPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = state.tenant_form;
    let (submitting, set_submitting) = create_signal(false);

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = form.get();
        if !draft.is_complete() {
            // Incomplete drafts are skipped without a request
            return;
        }

        set_submitting.set(true);

        let state = submit_state.clone();
        spawn_local(async move {
            match api::create_tenant(&draft.name, &draft.code).await {
                Ok(_) => {
                    form.set(Default::default());
                    state.show_success("Tenant created");
                    state.refresh_all().await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to create tenant: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Section title="Create Tenant">
            <form on:submit=on_submit class="space-y-3">
                <div class="grid grid-cols-2 gap-3">
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
                </div>
                <SubmitButton label="Add Tenant" submitting=submitting />
            </form>

            <TenantList />
        </Section>
    }
}

#[component]
fn TenantList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let tenants = state.tenants;
    let loading = state.loading;

    view! {
        <div class="mt-4 max-h-44 overflow-auto text-sm">
            {move || {
                let records = tenants.get();
                if records.is_empty() {
                    if loading.get() {
                        return view! { <ListSkeleton /> }.into_view();
                    }
                    return view! {
                        <p class="text-gray-400 py-2">"No tenants yet"</p>
                    }.into_view();
                }

                records.into_iter().map(|tenant| {
                    let status = tenant.status_label().to_string();
                    view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-100">
                            <div>
                                <p class="font-medium text-gray-800">{tenant.name}</p>
                                <p class="text-xs text-gray-500">"Code: " {tenant.code}</p>
                            </div>
                            <span class="text-xs px-2 py-1 rounded bg-indigo-100 text-indigo-700">
                                {status}
                            </span>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
