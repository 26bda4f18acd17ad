//! Stat Card Component
//!
//! Small tile showing one collection count.

use leptos::*;

#[component]
pub fn StatCard(
    /// Collection label
    #[prop(into)]
    label: String,
    /// Live record count
    #[prop(into)]
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-indigo-50 to-blue-50 rounded-lg p-4 border border-indigo-100">
            <p class="text-xs uppercase tracking-wide text-indigo-600 font-medium">{label}</p>
            <p class="text-2xl font-bold text-indigo-900 mt-1">{move || value.get()}</p>
        </div>
    }
}
