//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod charts;
pub mod heatmap;
pub mod loading;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use charts::{BarChart, GroupedBarChart, PieChart};
pub use heatmap::CorrelationHeatmap;
pub use loading::{ChartSkeleton, ErrorPanel, TableSkeleton};
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use toast::Toast;
