//! Loading Component
//!
//! Skeleton rows shown while a record list is first loading.

use leptos::*;

#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse py-2">
            {(0..count).map(|_| view! {
                <div class="bg-gray-100 rounded h-10" />
            }).collect_view()}
        </div>
    }
}
