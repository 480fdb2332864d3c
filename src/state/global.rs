//! Notifications Context
//!
//! Transient success/error toasts shared through the component tree. This is
//! deliberately the only cross-view context: every view owns its fetched data
//! privately, so nothing else is global.

use leptos::*;

/// Toast notification signals provided to all components.
#[derive(Clone, Copy)]
pub struct Notifications {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message to display
    pub success: RwSignal<Option<String>>,
}

/// Provide the notifications context to the component tree.
pub fn provide_notifications() {
    let notifications = Notifications {
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(notifications);
}

impl Notifications {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
