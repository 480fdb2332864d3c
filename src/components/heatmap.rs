//! Correlation Heatmap
//!
//! Renders a correlation matrix as a table with per-cell color intensity.
//! Sign picks the hue (warm for positive, cool for negative), magnitude maps
//! to opacity within a clamped range, and the diagonal self-correlation value
//! of exactly 1 gets a fixed distinct style.

use leptos::*;

use crate::api::types::CorrelationMatrix;

const OPACITY_MIN: f64 = 0.15;
const OPACITY_MAX: f64 = 0.9;

/// Positive hue, coolwarm-style (red)
const POSITIVE_RGB: &str = "239, 68, 68";
/// Negative hue (blue)
const NEGATIVE_RGB: &str = "59, 130, 246";

/// Visual treatment for one correlation cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellShade {
    /// Diagonal value of exactly 1
    SelfCorrelation,
    /// Positive correlation with the given opacity
    Positive(f64),
    /// Negative correlation with the given opacity
    Negative(f64),
}

impl CellShade {
    /// Inline style for a table cell with this shade.
    pub fn css(&self) -> String {
        match self {
            CellShade::SelfCorrelation => {
                "background-color: #334155; color: #ffffff;".to_string()
            }
            CellShade::Positive(opacity) => {
                format!("background-color: rgba({}, {:.2});", POSITIVE_RGB, opacity)
            }
            CellShade::Negative(opacity) => {
                format!("background-color: rgba({}, {:.2});", NEGATIVE_RGB, opacity)
            }
        }
    }

    /// The opacity applied, if sign/magnitude logic was used.
    pub fn opacity(&self) -> Option<f64> {
        match self {
            CellShade::SelfCorrelation => None,
            CellShade::Positive(opacity) | CellShade::Negative(opacity) => Some(*opacity),
        }
    }
}

/// Shade for one correlation value.
pub fn shade(value: f64) -> CellShade {
    if value == 1.0 {
        return CellShade::SelfCorrelation;
    }

    let opacity = (value.abs() * OPACITY_MAX).clamp(OPACITY_MIN, OPACITY_MAX);
    if value >= 0.0 {
        CellShade::Positive(opacity)
    } else {
        CellShade::Negative(opacity)
    }
}

/// Correlation matrix rendered as a shaded table
#[component]
pub fn CorrelationHeatmap(matrix: CorrelationMatrix) -> impl IntoView {
    let labels = matrix.labels.clone();
    let header_labels = labels.clone();

    view! {
        <div class="overflow-x-auto">
            <table class="text-xs text-gray-700 border-collapse">
                <thead>
                    <tr>
                        <th class="px-2 py-1"></th>
                        {header_labels
                            .iter()
                            .map(|label| {
                                view! {
                                    <th class="px-2 py-1 font-medium">{label.clone()}</th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {labels
                        .iter()
                        .enumerate()
                        .map(|(row, row_label)| {
                            let cells = (0..labels.len())
                                .map(|col| match matrix.cell(row, col) {
                                    Some(value) => {
                                        let style = shade(value).css();
                                        view! {
                                            <td class="px-2 py-1 text-center" style=style>
                                                {format!("{:.2}", value)}
                                            </td>
                                        }
                                    }
                                    None => view! {
                                        <td class="px-2 py-1 text-center text-gray-400">"—"</td>
                                    },
                                })
                                .collect_view();

                            view! {
                                <tr>
                                    <th class="px-2 py-1 text-left font-medium">
                                        {row_label.clone()}
                                    </th>
                                    {cells}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_correlation_gets_fixed_style() {
        assert_eq!(shade(1.0), CellShade::SelfCorrelation);
        assert!(shade(1.0).opacity().is_none());
    }

    #[test]
    fn opposite_signs_equal_magnitude_share_opacity() {
        let positive = shade(0.8);
        let negative = shade(-0.8);

        assert!(matches!(positive, CellShade::Positive(_)));
        assert!(matches!(negative, CellShade::Negative(_)));
        assert_eq!(positive.opacity(), negative.opacity());
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(shade(0.01).opacity(), Some(OPACITY_MIN));
        assert_eq!(shade(-1.0).opacity(), Some(OPACITY_MAX));
    }

    #[test]
    fn near_one_is_not_self() {
        assert!(matches!(shade(0.999), CellShade::Positive(_)));
    }

    #[test]
    fn zero_uses_positive_hue_at_minimum_opacity() {
        assert_eq!(shade(0.0), CellShade::Positive(OPACITY_MIN));
    }
}
