//! Dashboard Page
//!
//! Dataset analytics view: KPI cards, distribution charts, risk breakdowns,
//! and the feature correlation heatmap.

use leptos::*;

use crate::api;
use crate::api::types::AnalyticsSnapshot;
use crate::api::ApiBase;
use crate::components::{
    BarChart, ChartSkeleton, CorrelationHeatmap, ErrorPanel, GroupedBarChart, PieChart, StatCard,
};
use crate::state::FetchState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let api_base = use_context::<ApiBase>().expect("ApiBase not found");

    let analytics = create_rw_signal(FetchState::<AnalyticsSnapshot>::Idle);
    let reload = create_rw_signal(0_u32);

    // Fetch on mount and again whenever a retry bumps the reload counter
    create_effect(move |_| {
        reload.get();
        analytics.update(|state| state.begin());

        let base = api_base.0.clone();
        spawn_local(async move {
            let result = api::fetch_analytics(&base).await;

            match &result {
                Ok(snapshot) => {
                    let missing = snapshot.missing_sections();
                    if !missing.is_empty() {
                        web_sys::console::warn_1(
                            &format!(
                                "Analytics response missing sections: {}",
                                missing.join(", ")
                            )
                            .into(),
                        );
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dashboard analytics: {}", e).into(),
                    );
                }
            }

            analytics.update(|state| state.resolve(result));
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-800">"Dataset Analytics Dashboard"</h1>
                <p class="text-gray-600 mt-1">
                    "Aggregate view of the diabetes screening dataset"
                </p>
            </div>

            {move || match analytics.get() {
                FetchState::Idle | FetchState::Loading => view! {
                    <div class="grid md:grid-cols-2 gap-6">
                        <ChartSkeleton />
                        <ChartSkeleton />
                        <ChartSkeleton />
                        <ChartSkeleton />
                    </div>
                }
                .into_view(),
                FetchState::Failed(message) => view! {
                    <ErrorPanel
                        message=message
                        on_retry=move |_| reload.update(|n| *n += 1)
                    />
                }
                .into_view(),
                FetchState::Loaded(snapshot) => view! {
                    <AnalyticsGrid snapshot=snapshot />
                }
                .into_view(),
            }}
        </div>
    }
}

/// Chart grid for a loaded analytics snapshot
#[component]
fn AnalyticsGrid(snapshot: AnalyticsSnapshot) -> impl IntoView {
    let kpis = snapshot.kpis.clone().unwrap_or_default();

    let diabetes_dist = snapshot.diabetes_distribution.clone().unwrap_or_default();
    let age_dist = snapshot.age_distribution.clone().unwrap_or_default();
    let bmi_dist = snapshot.bmi_distribution.clone().unwrap_or_default();
    let gender_dist = snapshot.gender_distribution.clone().unwrap_or_default();
    let average_metrics = snapshot.average_metrics.clone().unwrap_or_default();

    let health_breakdown = snapshot.health_vs_diabetes.clone().unwrap_or_default();
    let age_breakdown = snapshot.age_vs_diabetes.clone().unwrap_or_default();

    let health_groups: Vec<(&'static str, Vec<f64>)> = health_breakdown
        .series()
        .into_iter()
        .map(|(name, values)| (name, values.to_vec()))
        .collect();
    let age_groups: Vec<(&'static str, Vec<f64>)> = age_breakdown
        .series()
        .into_iter()
        .map(|(name, values)| (name, values.to_vec()))
        .collect();

    view! {
        <div class="space-y-6">
            // KPI row
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Diabetes Rate" value=kpis.diabetes_rate />
                <StatCard label="Smoker Rate" value=kpis.smoker_rate />
                <StatCard label="High Blood Pressure" value=kpis.high_bp_rate />
                <StatCard label="Physically Active" value=kpis.phys_activity_rate />
            </div>

            // Chart grid
            <div class="grid md:grid-cols-2 gap-6">
                <Card title="Diabetes Distribution">
                    <PieChart series=diabetes_dist.series() />
                </Card>
                <Card title="Diabetes Rate by General Health">
                    <GroupedBarChart labels=health_breakdown.labels.clone() groups=health_groups />
                </Card>
                <Card title="Risk by Age Category">
                    <GroupedBarChart labels=age_breakdown.labels.clone() groups=age_groups />
                </Card>
                <Card title="Age Distribution">
                    <BarChart series=age_dist.series() />
                </Card>
                <Card title="BMI Distribution">
                    <BarChart series=bmi_dist.series() color="#9966FF" />
                </Card>
                <Card title="Gender Distribution">
                    <BarChart series=gender_dist.series() color="#4BC0C0" />
                </Card>
                <Card title="Average Health Metrics">
                    <BarChart series=average_metrics.series() color="#FF9F40" />
                </Card>
                <Card title="Feature Correlation">
                    {match snapshot.correlation_matrix.clone() {
                        Some(matrix) if !matrix.labels.is_empty() => view! {
                            <CorrelationHeatmap matrix=matrix />
                        }
                        .into_view(),
                        _ => view! {
                            <p class="text-gray-400 text-sm py-8 text-center">
                                "No correlation data available"
                            </p>
                        }
                        .into_view(),
                    }}
                </Card>
            </div>
        </div>
    }
}

/// White card wrapper with a section title
#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <h3 class="text-lg font-semibold text-gray-800 mb-4">{title}</h3>
            {children()}
        </div>
    }
}
