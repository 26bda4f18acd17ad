//! Section Component
//!
//! Titled card container used for every dashboard block.

use leptos::*;

#[component]
pub fn Section(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-sm border border-gray-100 p-6">
            <h2 class="text-xl font-semibold text-gray-800 mb-4">{title}</h2>
            {children()}
        </section>
    }
}
