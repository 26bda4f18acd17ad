//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Settings};
use crate::state::global::{provide_global_state, BackendStatus, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 to-indigo-50 text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 max-w-7xl w-full mx-auto px-6 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with backend status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing backend status and refresh age
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let status = state.status;
    let last_refresh = state.last_refresh;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-white/80 backdrop-blur border-t border-gray-200 py-3 px-4">
            <div class="max-w-7xl mx-auto flex items-center justify-between text-sm">
                // Backend status dot
                {move || {
                    match status.get() {
                        BackendStatus::Connected(_) => view! {
                            <span class="flex items-center gap-1 text-green-600">
                                <span class="w-2 h-2 bg-green-500 rounded-full" />
                                <span>"Connected"</span>
                            </span>
                        }.into_view(),
                        BackendStatus::Checking => view! {
                            <span class="flex items-center gap-1 text-gray-400">
                                <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                <span>"Checking"</span>
                            </span>
                        }.into_view(),
                        BackendStatus::Unreachable => view! {
                            <span class="flex items-center gap-1 text-red-500">
                                <span class="w-2 h-2 bg-red-400 rounded-full" />
                                <span>"Offline"</span>
                            </span>
                        }.into_view(),
                    }
                }}

                // Last refresh time
                <div class="text-gray-500">
                    {move || {
                        last_refresh.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last refresh: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not refreshed".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center gap-2 text-indigo-500">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn-primary">
                "Go to Dashboard"
            </A>
        </div>
    }
}
