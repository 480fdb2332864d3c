//! API Layer
//!
//! HTTP client and typed endpoint schemas.

pub mod client;
pub mod types;

pub use client::{
    fetch_analytics, fetch_model_reports, resolve_api_base, submit_prediction, ApiBase,
};
