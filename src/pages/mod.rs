//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod model_performance;
pub mod prediction;

pub use dashboard::Dashboard;
pub use model_performance::ModelPerformance;
pub use prediction::Prediction;
