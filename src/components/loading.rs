//! Loading & Error Components
//!
//! Skeleton states and the error panel with retry.

use leptos::*;

/// Skeleton loader for chart cards
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-6 animate-pulse">
            <div class="h-6 bg-gray-200 rounded w-1/4 mb-4" />
            <div class="h-64 bg-gray-200 rounded" />
        </div>
    }
}

/// Skeleton loader for table rows
#[component]
pub fn TableSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 rounded h-12" />
            }).collect_view()}
        </div>
    }
}

/// Error panel with a visible message and a manual retry action
#[component]
pub fn ErrorPanel(
    #[prop(into)]
    message: String,
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-6 text-center">
            <div class="text-3xl mb-2">"⚠"</div>
            <p class="text-red-800 font-medium mb-1">"Something went wrong"</p>
            <p class="text-red-600 text-sm mb-4">{message}</p>
            <button
                on:click=move |_| on_retry.call(())
                class="px-6 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
            >
                "Retry"
            </button>
        </div>
    }
}
