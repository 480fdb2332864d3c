//! Diabetes AI Dashboard
//!
//! Frontend for a diabetes-risk prediction service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Dataset analytics dashboard with distribution charts and a correlation heatmap
//! - Side-by-side classification-report comparison for the trained models
//! - Interactive risk-prediction form
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the prediction API via HTTP; every view
//! owns its own fetch lifecycle and local state.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
