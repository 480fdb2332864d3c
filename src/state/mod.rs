//! State Management
//!
//! Per-view fetch state machine and the notifications context.

pub mod fetch;
pub mod global;

pub use fetch::FetchState;
pub use global::{provide_notifications, Notifications};
