//! Invoice Panel
//!
//! Creation form and record list for invoices.

use leptos::*;

use crate::api;
use crate::components::fields::{StudentSelect, SubmitButton, TenantSelect, TextField};
use crate::components::loading::ListSkeleton;
use crate::components::section::Section;
use crate::state::forms::Draft;
use crate::state::global::GlobalState;

#[component]
pub fn InvoicePanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = state.invoice_form;
    let (submitting, set_submitting) = create_signal(false);

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = form.get();
        if !draft.is_complete() {
            return;
        }
        // is_complete guarantees the amount parses; extract it for the payload
        let Some(amount) = draft.parsed_amount() else {
            return;
        };

        set_submitting.set(true);

        let state = submit_state.clone();
        spawn_local(async move {
            match api::create_invoice(&draft.tenant_id, &draft.student_id, &draft.title, amount)
                .await
            {
                Ok(_) => {
                    form.set(Default::default());
                    state.show_success("Invoice created");
                    state.refresh_all().await;
                }
                Err(e) => {
                    state.show_error(&format!("Failed to create invoice: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Section title="Create Invoice">
            <form on:submit=on_submit class="space-y-3">
                <div class="grid grid-cols-2 gap-3">
                    <TenantSelect
                        value=Signal::derive(move || form.get().tenant_id)
                        on_change=move |v| form.update(|f| f.tenant_id = v)
                    />
                    <StudentSelect
                        value=Signal::derive(move || form.get().student_id)
                        on_change=move |v| form.update(|f| f.student_id = v)
                    />
                    <TextField
                        placeholder="Title"
                        value=Signal::derive(move || form.get().title)
                        on_input=move |v| form.update(|f| f.title = v)
                    />
                    <TextField
                        placeholder="Amount"
                        input_type="number"
                        value=Signal::derive(move || form.get().amount)
                        on_input=move |v| form.update(|f| f.amount = v)
                    />
                </div>
                <SubmitButton label="Create Invoice" submitting=submitting />
            </form>

            <InvoiceList />
        </Section>
    }
}

#[component]
fn InvoiceList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let invoices = state.invoices;
    let loading = state.loading;

    view! {
        <div class="mt-4 max-h-44 overflow-auto text-sm">
            {move || {
                let records = invoices.get();
                if records.is_empty() {
                    if loading.get() {
                        return view! { <ListSkeleton /> }.into_view();
                    }
                    return view! {
                        <p class="text-gray-400 py-2">"No invoices yet"</p>
                    }.into_view();
                }

                records.into_iter().map(|invoice| {
                    let detail = format!("Amount: {} • Status: {}", invoice.amount, invoice.status);
                    view! {
                        <div class="py-2 border-b border-gray-100">
                            <p class="font-medium text-gray-800">{invoice.title}</p>
                            <p class="text-xs text-gray-500">{detail}</p>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
