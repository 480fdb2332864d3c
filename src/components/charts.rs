//! Chart Components
//!
//! Pie and bar charts drawn on HTML5 Canvas from label/value series.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Chart colors for different series
const SERIES_COLORS: [&str; 6] = [
    "#36A2EB", // Blue (primary)
    "#FF6384", // Pink
    "#4BC0C0", // Teal
    "#9966FF", // Purple
    "#FF9F40", // Orange
    "#FFCD56", // Yellow
];

/// Pie chart for a single categorical distribution
#[component]
pub fn PieChart(series: Vec<(String, f64)>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let legend_labels: Vec<String> = series.iter().map(|(label, _)| label.clone()).collect();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie_chart(&canvas, &series);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full rounded-lg"
            />
            <Legend labels=legend_labels />
        </div>
    }
}

/// Bar chart for a single labeled series
#[component]
pub fn BarChart(
    series: Vec<(String, f64)>,
    #[prop(default = SERIES_COLORS[0])]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &series, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="500"
            height="300"
            class="w-full rounded-lg"
        />
    }
}

/// Grouped bar chart comparing named series across shared labels
#[component]
pub fn GroupedBarChart(
    labels: Vec<String>,
    groups: Vec<(&'static str, Vec<f64>)>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let labels_for_draw = labels.clone();
    let groups_for_draw = groups.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_grouped_bar_chart(&canvas, &labels_for_draw, &groups_for_draw);
        }
    });

    let legend_labels: Vec<String> = groups.iter().map(|(name, _)| name.to_string()).collect();

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="500"
                height="300"
                class="w-full rounded-lg"
            />
            <Legend labels=legend_labels />
        </div>
    }
}

/// Color swatch legend below a chart
#[component]
fn Legend(labels: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {labels
                .into_iter()
                .enumerate()
                .map(|(idx, label)| {
                    let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Start/end angles in radians for each positive slice of a pie.
///
/// Slices start at 12 o'clock and proceed clockwise. Non-positive values
/// produce empty slices so a partly bad series still renders.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }

    let start_offset = -std::f64::consts::FRAC_PI_2;
    let mut angle = start_offset;
    values
        .iter()
        .map(|value| {
            let share = if *value > 0.0 { value / total } else { 0.0 };
            let start = angle;
            angle += share * std::f64::consts::PI * 2.0;
            (start, angle)
        })
        .collect()
}

/// Top of the y-axis for a bar chart: the data maximum with 10% headroom,
/// never below 1 so an all-zero series still gets a sane axis.
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    (max * 1.1).max(1.0)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text("No data available", width / 2.0 - 55.0, height / 2.0);
}

fn draw_pie_chart(canvas: &HtmlCanvasElement, series: &[(String, f64)]) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let angles = slice_angles(&values);

    if angles.iter().all(|(start, end)| end <= start) {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 20.0;

    for (idx, (start, end)) in angles.iter().enumerate() {
        if end <= start {
            continue;
        }
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, *start, *end);
        ctx.close_path();
        ctx.fill();
    }
}

fn draw_bar_chart(canvas: &HtmlCanvasElement, series: &[(String, f64)], color: &str) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 50.0;
    let margin_right = 15.0;
    let margin_top = 15.0;
    let margin_bottom = 40.0;
    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let y_max = axis_max(&values);

    draw_y_axis(&ctx, y_max, margin_left, margin_top, width - margin_right, chart_height);

    // Bars with a gap of 20% of the slot width on each side
    let slot = chart_width / series.len() as f64;
    let bar_width = slot * 0.6;

    ctx.set_fill_style(&color.into());
    for (i, (_, value)) in series.iter().enumerate() {
        let bar_height = (value / y_max).clamp(0.0, 1.0) * chart_height;
        let x = margin_left + i as f64 * slot + slot * 0.2;
        let y = margin_top + chart_height - bar_height;
        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    draw_x_labels(&ctx, series, margin_left, slot, height);
}

fn draw_grouped_bar_chart(
    canvas: &HtmlCanvasElement,
    labels: &[String],
    groups: &[(&'static str, Vec<f64>)],
) {
    let Some(ctx) = context_2d(canvas) else { return };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if labels.is_empty() || groups.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 50.0;
    let margin_right = 15.0;
    let margin_top = 15.0;
    let margin_bottom = 40.0;
    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let all_values: Vec<f64> = groups.iter().flat_map(|(_, v)| v.iter().copied()).collect();
    let y_max = axis_max(&all_values);

    draw_y_axis(&ctx, y_max, margin_left, margin_top, width - margin_right, chart_height);

    let slot = chart_width / labels.len() as f64;
    let bar_width = (slot * 0.8) / groups.len() as f64;

    for (group_idx, (_, values)) in groups.iter().enumerate() {
        let color = SERIES_COLORS[group_idx % SERIES_COLORS.len()];
        ctx.set_fill_style(&color.into());

        for (i, value) in values.iter().enumerate().take(labels.len()) {
            let bar_height = (value / y_max).clamp(0.0, 1.0) * chart_height;
            let x = margin_left + i as f64 * slot + slot * 0.1 + group_idx as f64 * bar_width;
            let y = margin_top + chart_height - bar_height;
            ctx.fill_rect(x, y, bar_width, bar_height);
        }
    }

    let label_series: Vec<(String, f64)> = labels.iter().map(|l| (l.clone(), 0.0)).collect();
    draw_x_labels(&ctx, &label_series, margin_left, slot, height);
}

fn draw_y_axis(
    ctx: &CanvasRenderingContext2d,
    y_max: f64,
    margin_left: f64,
    margin_top: f64,
    right: f64,
    chart_height: f64,
) {
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format_axis_value(value), 5.0, y + 4.0);
    }
}

fn draw_x_labels(
    ctx: &CanvasRenderingContext2d,
    series: &[(String, f64)],
    margin_left: f64,
    slot: f64,
    height: f64,
) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("11px sans-serif");

    // Thin out labels when there are too many slots to fit them all
    let step = (series.len() / 12).max(1);
    for (i, (label, _)) in series.iter().enumerate().step_by(step) {
        let x = margin_left + i as f64 * slot + slot * 0.1;
        let short: String = label.chars().take(10).collect();
        let _ = ctx.fill_text(&short, x, height - 15.0);
    }
}

/// Compact axis label: whole numbers below 1k, otherwise "12.3k"
pub fn format_axis_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_angles_cover_full_circle() {
        let angles = slice_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles.len(), 3);

        let total: f64 = angles.iter().map(|(s, e)| e - s).sum();
        assert!((total - std::f64::consts::PI * 2.0).abs() < 1e-9);

        // 2.0 out of 4.0 total is half the circle
        let (start, end) = angles[2];
        assert!((end - start - std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn slice_angles_skip_non_positive_values() {
        let angles = slice_angles(&[3.0, 0.0, -1.0]);
        assert_eq!(angles[1].0, angles[1].1);
        assert_eq!(angles[2].0, angles[2].1);

        let all_zero = slice_angles(&[0.0, 0.0]);
        assert!(all_zero.iter().all(|(s, e)| s == e));
    }

    #[test]
    fn axis_max_pads_and_floors() {
        assert!((axis_max(&[100.0]) - 110.0).abs() < 1e-9);
        assert_eq!(axis_max(&[]), 1.0);
        assert_eq!(axis_max(&[0.0, 0.0]), 1.0);
    }

    #[test]
    fn axis_values_format_compactly() {
        assert_eq!(format_axis_value(42.0), "42");
        assert_eq!(format_axis_value(12300.0), "12.3k");
    }
}
