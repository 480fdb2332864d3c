//! Stat Card Component
//!
//! Displays a single KPI percentage prominently.

use leptos::*;

/// KPI percentage card
#[component]
pub fn StatCard(
    label: &'static str,
    value: Option<f64>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-4 border border-gray-200">
            <span class="text-gray-500 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2 text-gray-800">
                {value
                    .map(|v| format!("{:.1}%", v))
                    .unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}
