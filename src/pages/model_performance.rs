//! Model Performance Page
//!
//! Side-by-side comparison of classification reports for each trained model,
//! with the best-accuracy model highlighted.

use leptos::*;

use crate::api;
use crate::api::types::{ClassificationReport, ModelReportSet, SegmentMetrics};
use crate::api::ApiBase;
use crate::components::{ErrorPanel, TableSkeleton};
use crate::state::FetchState;

/// Segments shown as column groups, in display order
const SEGMENTS: [(&str, &str); 5] = [
    ("0", "Class 0 (No Diabetes)"),
    ("1", "Class 1 (Pre-diabetes)"),
    ("2", "Class 2 (Diabetes)"),
    ("macro avg", "Macro Avg"),
    ("weighted avg", "Weighted Avg"),
];

/// Model performance page component
#[component]
pub fn ModelPerformance() -> impl IntoView {
    let api_base = use_context::<ApiBase>().expect("ApiBase not found");

    let reports = create_rw_signal(FetchState::<ModelReportSet>::Idle);
    let reload = create_rw_signal(0_u32);

    create_effect(move |_| {
        reload.get();
        reports.update(|state| state.begin());

        let base = api_base.0.clone();
        spawn_local(async move {
            let result = api::fetch_model_reports(&base).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Failed to fetch model performance: {}", e).into(),
                );
            }
            reports.update(|state| state.resolve(result));
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-800">"Model Metrics & Performance"</h1>
                <p class="text-gray-600 mt-1">
                    "A detailed comparison of the performance metrics for each classification model"
                </p>
            </div>

            {move || match reports.get() {
                FetchState::Idle | FetchState::Loading => view! {
                    <TableSkeleton count=4 />
                }
                .into_view(),
                FetchState::Failed(message) => view! {
                    <ErrorPanel
                        message=message
                        on_retry=move |_| reload.update(|n| *n += 1)
                    />
                }
                .into_view(),
                FetchState::Loaded(reports) => view! {
                    <ReportTable reports=reports />
                }
                .into_view(),
            }}
        </div>
    }
}

/// Comparison table for a loaded report set
#[component]
fn ReportTable(reports: ModelReportSet) -> impl IntoView {
    if reports.is_empty() {
        return view! {
            <p class="text-gray-400 text-center py-12">"No model reports available"</p>
        }
        .into_view();
    }

    let best = reports.best_model().map(str::to_string);

    view! {
        <div class="overflow-x-auto bg-white rounded-lg shadow-md">
            <table class="w-full text-sm text-left text-gray-700">
                <thead class="text-xs text-gray-800 uppercase bg-gray-100 border-b">
                    <tr>
                        <th rowspan="2" class="px-4 py-3 border-r">"Model"</th>
                        <th rowspan="2" class="px-4 py-3 border-r">"Accuracy"</th>
                        {SEGMENTS
                            .iter()
                            .map(|(_, title)| view! {
                                <th colspan="4" class="px-4 py-3 text-center border-r">
                                    {*title}
                                </th>
                            })
                            .collect_view()}
                        <th rowspan="2" class="px-4 py-3">"Best"</th>
                    </tr>
                    <tr>
                        {SEGMENTS
                            .iter()
                            .flat_map(|_| {
                                ["precision", "recall", "f1-score", "support"]
                                    .into_iter()
                                    .map(|metric| view! {
                                        <th class="px-4 py-3 border-r border-t">{metric}</th>
                                    })
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {reports
                        .entries
                        .iter()
                        .map(|(name, report)| {
                            let is_best = best.as_deref() == Some(name.as_str());
                            view! {
                                <ReportRow
                                    name=name.clone()
                                    report=report.clone()
                                    is_best=is_best
                                />
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

/// One table row per model
#[component]
fn ReportRow(name: String, report: ClassificationReport, is_best: bool) -> impl IntoView {
    let row_class = if is_best {
        "border-b hover:bg-gray-50 bg-green-50"
    } else {
        "border-b hover:bg-gray-50 bg-white"
    };

    view! {
        <tr class=row_class>
            <td class="px-4 py-4 font-semibold text-gray-900 border-r">{name}</td>
            <td class="px-4 py-4 font-bold text-blue-600 border-r">
                {format!("{:.2}%", report.accuracy * 100.0)}
            </td>
            {SEGMENTS
                .iter()
                .map(|(key, _)| {
                    view! { <SegmentCells metrics=report.segment(key).cloned() /> }
                })
                .collect_view()}
            <td class="px-4 py-4 text-center text-xl">
                {if is_best { "✅" } else { "" }}
            </td>
        </tr>
    }
}

/// Four metric cells for one segment, or a placeholder when absent
#[component]
fn SegmentCells(metrics: Option<SegmentMetrics>) -> impl IntoView {
    match metrics {
        Some(metrics) => view! {
            <td class="px-4 py-4 font-mono">{format!("{:.3}", metrics.precision)}</td>
            <td class="px-4 py-4 font-mono">{format!("{:.3}", metrics.recall)}</td>
            <td class="px-4 py-4 font-mono">{format!("{:.3}", metrics.f1_score)}</td>
            <td class="px-4 py-4 font-mono border-r">{format!("{:.0}", metrics.support)}</td>
        }
        .into_view(),
        None => view! {
            <td colspan="4" class="px-4 py-4 text-gray-400 text-center border-r">
                "Data not available"
            </td>
        }
        .into_view(),
    }
}
