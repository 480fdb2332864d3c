//! Sidebar Component
//!
//! Persistent navigation sidebar with active-route highlighting.

use leptos::*;
use leptos_router::*;

/// Navigation sidebar component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="w-64 bg-gray-800 text-white flex flex-col shrink-0">
            // Brand header
            <div class="h-20 flex items-center justify-center border-b border-gray-700">
                <h2 class="text-2xl font-bold">"Diabetes AI"</h2>
            </div>

            // Navigation links
            <nav class="flex-1">
                <ul>
                    <li><SidebarLink href="/" label="Dashboard" exact=true /></li>
                    <li><SidebarLink href="/model-performance" label="Model Performance" /></li>
                    <li><SidebarLink href="/prediction" label="Prediction" /></li>
                </ul>
            </nav>
        </div>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    label: &'static str,
    #[prop(default = false)]
    exact: bool,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=exact
            class="flex items-center px-4 py-3 text-gray-300 hover:bg-gray-700 hover:text-white transition-colors duration-200"
            active_class="bg-gray-900 text-white"
        >
            {label}
        </A>
    }
}
