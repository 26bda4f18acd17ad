//! Dashboard Page
//!
//! The single admin view: collection stats, one panel per entity, and the
//! backend quick links.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{
    AnnouncementPanel, ClassPanel, InvoicePanel, Section, StatCard, StudentPanel, TenantPanel,
};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Probe the backend and load every collection on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            state.probe_backend().await;
            state.refresh_all().await;
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <StatRow />

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <TenantPanel />
                <ClassPanel />
                <StudentPanel />
                <AnnouncementPanel />
                <InvoicePanel />
            </div>

            <QuickLinks />
        </div>
    }
}

/// Record counts for all five collections
#[component]
fn StatRow() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let tenants = state.tenants;
    let students = state.students;
    let classes = state.classes;
    let announcements = state.announcements;
    let invoices = state.invoices;

    view! {
        <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
            <StatCard label="Tenants" value=Signal::derive(move || tenants.get().len()) />
            <StatCard label="Students" value=Signal::derive(move || students.get().len()) />
            <StatCard label="Classes" value=Signal::derive(move || classes.get().len()) />
            <StatCard label="Announcements" value=Signal::derive(move || announcements.get().len()) />
            <StatCard label="Invoices" value=Signal::derive(move || invoices.get().len()) />
        </div>
    }
}

/// Backend pointers at the bottom of the page
#[component]
fn QuickLinks() -> impl IntoView {
    view! {
        <Section title="Quick Links">
            <div class="flex items-center justify-between text-sm flex-wrap gap-2">
                <A href="/settings" class="px-3 py-2 bg-gray-900 text-white rounded-md">
                    "Backend Settings"
                </A>
                <span class="text-gray-600">"API Base: " {api::get_api_base()}</span>
            </div>
        </Section>
    }
}
