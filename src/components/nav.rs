//! Navigation Component
//!
//! Header bar with brand, backend status and page links.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let status = state.status;

    view! {
        <header class="sticky top-0 z-10 backdrop-blur bg-white/70 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                <A href="/" class="flex items-center gap-3">
                    <div class="h-9 w-9 rounded-lg bg-indigo-600 text-white grid place-content-center font-bold">
                        "E"
                    </div>
                    <div>
                        <h1 class="text-lg font-semibold text-gray-900">"EDmin"</h1>
                        <p class="text-xs text-gray-500">"SaaS Student & Education Management"</p>
                    </div>
                </A>

                <div class="flex items-center gap-4">
                    <div class="text-sm text-gray-600">
                        "Backend: " {move || status.get().label()}
                    </div>
                    <NavLink href="/" label="Dashboard" />
                    <NavLink href="/settings" label="Settings" />
                </div>
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-3 py-2 rounded-lg text-sm text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            {label}
        </A>
    }
}
