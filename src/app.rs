//! App Root Component
//!
//! Main application component with routing and the sidebar shell.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Sidebar, Toast};
use crate::pages::{Dashboard, ModelPerformance, Prediction};
use crate::state::provide_notifications;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide toast notifications to all components
    provide_notifications();

    // Resolve the backend base URL once at startup
    provide_context(api::resolve_api_base());

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100 font-sans">
                // Persistent navigation sidebar
                <Sidebar />

                // Main content area
                <main class="flex-1 overflow-y-auto p-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/model-performance" view=ModelPerformance />
                        <Route path="/prediction" view=Prediction />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2 text-gray-800">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
