//! Settings Page
//!
//! Backend connection configuration.

use leptos::*;

use crate::api;
use crate::components::Section;
use crate::state::global::{BackendStatus, GlobalState};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Settings"</h1>
                <p class="text-gray-500 mt-1">"Configure your EDmin dashboard"</p>
            </div>

            <ApiSettings />

            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let status = state.status;

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);
        api::set_api_base(&api_url.get());

        let state = state_for_test.clone();
        spawn_local(async move {
            state.probe_backend().await;
            match state.status.get_untracked() {
                BackendStatus::Connected(_) => state.show_success("Connection successful"),
                _ => state.show_error("Connection failed"),
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        state_for_save.show_success("API URL saved");
    };

    view! {
        <Section title="API Connection">
            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"EDmin API URL"</label>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="input flex-1"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-2 bg-gray-200 hover:bg-gray-300 disabled:opacity-50
                                   rounded-md text-sm font-medium transition"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button on:click=save_url class="btn-primary">
                            "Save"
                        </button>
                    </div>
                </div>

                <div class="flex items-center gap-2 text-sm">
                    <span class="text-gray-500">"Status:"</span>
                    <span class="text-gray-800">{move || status.get().label()}</span>
                </div>
            </div>
        </Section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <Section title="About EDmin">
            <div class="space-y-3 text-sm text-gray-600">
                <p>
                    "EDmin is a multi-tenant school management dashboard. "
                    "Create tenants, register students, schedule classes, publish "
                    "announcements and raise invoices from one place."
                </p>
                <p class="text-gray-400">"Version 0.1.0"</p>
            </div>
        </Section>
    }
}
