//! API Schemas
//!
//! Typed request/response shapes for the prediction API. Every analytics
//! section is optional at the serde boundary: a partial payload degrades to
//! empty series instead of a parse failure, and `missing_sections` lets the
//! caller log what was absent.

use std::collections::HashMap;
use std::fmt;

// ============ Dashboard Analytics ============

/// Aggregate dataset analytics consumed by the dashboard.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub diabetes_distribution: Option<Distribution>,
    #[serde(default)]
    pub age_distribution: Option<Distribution>,
    #[serde(default)]
    pub bmi_distribution: Option<Distribution>,
    #[serde(default)]
    pub gender_distribution: Option<Distribution>,
    #[serde(default)]
    pub health_vs_diabetes: Option<RiskBreakdown>,
    #[serde(default)]
    pub age_vs_diabetes: Option<RiskBreakdown>,
    #[serde(default)]
    pub average_metrics: Option<Distribution>,
    #[serde(default)]
    pub kpis: Option<KpiSummary>,
    #[serde(default)]
    pub correlation_matrix: Option<CorrelationMatrix>,
}

impl AnalyticsSnapshot {
    /// Names of expected sections absent from the payload, for diagnostics.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.diabetes_distribution.is_none() {
            missing.push("diabetes_distribution");
        }
        if self.age_distribution.is_none() {
            missing.push("age_distribution");
        }
        if self.bmi_distribution.is_none() {
            missing.push("bmi_distribution");
        }
        if self.gender_distribution.is_none() {
            missing.push("gender_distribution");
        }
        if self.health_vs_diabetes.is_none() {
            missing.push("health_vs_diabetes");
        }
        if self.age_vs_diabetes.is_none() {
            missing.push("age_vs_diabetes");
        }
        if self.average_metrics.is_none() {
            missing.push("average_metrics");
        }
        if self.kpis.is_none() {
            missing.push("kpis");
        }
        if self.correlation_matrix.is_none() {
            missing.push("correlation_matrix");
        }
        missing
    }
}

/// Labeled counts or values for a single categorical distribution.
///
/// The backend spells the value vector `values` for most sections and
/// `counts` for the BMI histogram; both are accepted.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Distribution {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, alias = "counts")]
    pub values: Vec<f64>,
}

impl Distribution {
    /// Label/value pairs, truncated to the shorter of the two vectors.
    pub fn series(&self) -> Vec<(String, f64)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.values.iter().copied())
            .collect()
    }
}

/// Percentage of each diabetes tier within each group (e.g. per health
/// level or per age category).
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct RiskBreakdown {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub no_diabetes_percentage: Vec<f64>,
    #[serde(default)]
    pub prediabetes_percentage: Vec<f64>,
    #[serde(default)]
    pub diabetes_percentage: Vec<f64>,
}

impl RiskBreakdown {
    /// Named percentage series in display order.
    pub fn series(&self) -> Vec<(&'static str, &[f64])> {
        vec![
            ("No Diabetes", self.no_diabetes_percentage.as_slice()),
            ("Pre-diabetes", self.prediabetes_percentage.as_slice()),
            ("Diabetes", self.diabetes_percentage.as_slice()),
        ]
    }
}

/// Headline percentages shown as stat cards.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct KpiSummary {
    #[serde(default)]
    pub diabetes_rate: Option<f64>,
    #[serde(default)]
    pub smoker_rate: Option<f64>,
    #[serde(default)]
    pub high_bp_rate: Option<f64>,
    #[serde(default)]
    pub phys_activity_rate: Option<f64>,
}

/// Square matrix of pairwise feature correlations with shared labels.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct CorrelationMatrix {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub matrix: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Cell value at (row, col), if the matrix covers it.
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.matrix.get(row).and_then(|r| r.get(col)).copied()
    }
}

// ============ Model Performance ============

/// Classification reports for all trained models, in the order the backend
/// listed them. Order matters: ties for best accuracy go to the first model
/// seen, so the document order must survive deserialization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelReportSet {
    pub entries: Vec<(String, ClassificationReport)>,
}

impl ModelReportSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the model with strictly highest accuracy; first one wins ties.
    pub fn best_model(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (name, report) in &self.entries {
            match best {
                Some((_, accuracy)) if report.accuracy <= accuracy => {}
                _ => best = Some((name.as_str(), report.accuracy)),
            }
        }
        best.map(|(name, _)| name)
    }
}

impl<'de> serde::Deserialize<'de> for ModelReportSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = ModelReportSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of model name to classification report")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, ClassificationReport>()? {
                    entries.push(entry);
                }
                Ok(ModelReportSet { entries })
            }
        }

        deserializer.deserialize_map(Visitor)
    }
}

/// One model's classification report: overall accuracy plus per-class and
/// per-average metric segments keyed by `"0"`, `"1"`, `"2"`, `"macro avg"`,
/// `"weighted avg"`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ClassificationReport {
    #[serde(default)]
    pub accuracy: f64,
    #[serde(flatten)]
    pub segments: HashMap<String, SegmentMetrics>,
}

impl ClassificationReport {
    /// Metrics for one class or average segment, if the report includes it.
    pub fn segment(&self, key: &str) -> Option<&SegmentMetrics> {
        self.segments.get(key)
    }
}

/// Precision/recall/f1/support for one class or average.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct SegmentMetrics {
    #[serde(default)]
    pub precision: f64,
    #[serde(default)]
    pub recall: f64,
    #[serde(default, rename = "f1-score")]
    pub f1_score: f64,
    #[serde(default)]
    pub support: f64,
}

// ============ Prediction ============

/// Prediction form payload, serialized with the backend's exact field names.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PredictionInput {
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "HighBP")]
    pub high_bp: u8,
    #[serde(rename = "HighChol")]
    pub high_chol: u8,
    #[serde(rename = "Smoker")]
    pub smoker: u8,
    #[serde(rename = "PhysActivity")]
    pub phys_activity: u8,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            bmi: 25.0,
            age: 5,
            high_bp: 0,
            high_chol: 0,
            smoker: 0,
            phys_activity: 1,
        }
    }
}

/// BMI bounds accepted by the form.
pub const BMI_RANGE: (f64, f64) = (10.0, 60.0);
/// Age category bounds accepted by the form.
pub const AGE_RANGE: (u8, u8) = (1, 13);

impl PredictionInput {
    /// Build a validated payload from raw form field text.
    pub fn from_form(
        bmi: &str,
        age: &str,
        high_bp: &str,
        high_chol: &str,
        smoker: &str,
        phys_activity: &str,
    ) -> Result<Self, String> {
        let bmi: f64 = bmi
            .trim()
            .parse()
            .map_err(|_| "BMI must be a number".to_string())?;
        if !bmi.is_finite() || !(BMI_RANGE.0..=BMI_RANGE.1).contains(&bmi) {
            return Err(format!(
                "BMI must be between {} and {}",
                BMI_RANGE.0, BMI_RANGE.1
            ));
        }

        let age: u8 = age
            .trim()
            .parse()
            .map_err(|_| "Age category must be a whole number".to_string())?;
        if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&age) {
            return Err(format!(
                "Age category must be between {} and {}",
                AGE_RANGE.0, AGE_RANGE.1
            ));
        }

        Ok(Self {
            bmi,
            age,
            high_bp: parse_indicator(high_bp, "High Blood Pressure")?,
            high_chol: parse_indicator(high_chol, "High Cholesterol")?,
            smoker: parse_indicator(smoker, "Smoker")?,
            phys_activity: parse_indicator(phys_activity, "Physical Activity")?,
        })
    }
}

fn parse_indicator(value: &str, field: &str) -> Result<u8, String> {
    match value.trim() {
        "0" => Ok(0),
        "1" => Ok(1),
        _ => Err(format!("{} must be Yes or No", field)),
    }
}

/// Prediction response from the backend.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PredictionResult {
    pub prediction: i32,
    #[serde(default)]
    pub prediction_label: String,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

impl PredictionResult {
    /// Severity tier used to pick the result panel's visual treatment.
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_class(self.prediction)
    }
}

/// Visual severity tier keyed by the predicted class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskTier {
    pub fn from_class(class: i32) -> Self {
        match class {
            0 => RiskTier::Low,
            1 => RiskTier::Medium,
            2 => RiskTier::High,
            _ => RiskTier::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_parses_with_all_sections_missing() {
        let snapshot: AnalyticsSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.diabetes_distribution.is_none());
        assert_eq!(snapshot.missing_sections().len(), 9);
    }

    #[test]
    fn analytics_reports_only_absent_sections() {
        let snapshot: AnalyticsSnapshot = serde_json::from_str(
            r#"{
                "diabetes_distribution": {
                    "labels": ["No Diabetes", "Pre-diabetes", "Diabetes"],
                    "values": [180000, 4600, 35000]
                }
            }"#,
        )
        .unwrap();

        let missing = snapshot.missing_sections();
        assert!(!missing.contains(&"diabetes_distribution"));
        assert!(missing.contains(&"correlation_matrix"));
    }

    #[test]
    fn distribution_accepts_counts_alias() {
        let dist: Distribution = serde_json::from_str(
            r#"{"labels": ["(10, 15]", "(15, 20]"], "counts": [12, 340]}"#,
        )
        .unwrap();
        assert_eq!(dist.series(), vec![
            ("(10, 15]".to_string(), 12.0),
            ("(15, 20]".to_string(), 340.0),
        ]);
    }

    #[test]
    fn distribution_series_truncates_to_shorter_side() {
        let dist = Distribution {
            labels: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            values: vec![1.0],
        };
        assert_eq!(dist.series(), vec![("a".to_string(), 1.0)]);

        let empty = Distribution::default();
        assert!(empty.series().is_empty());
    }

    #[test]
    fn model_reports_preserve_document_order() {
        let reports: ModelReportSet = serde_json::from_str(
            r#"{
                "Logistic Regression": {"accuracy": 0.84},
                "Decision Tree": {"accuracy": 0.79},
                "Random Forest": {"accuracy": 0.83}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = reports.entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["Logistic Regression", "Decision Tree", "Random Forest"]
        );
    }

    #[test]
    fn best_model_is_strict_maximum_accuracy() {
        let reports: ModelReportSet = serde_json::from_str(
            r#"{
                "A": {"accuracy": 0.80},
                "B": {"accuracy": 0.85},
                "C": {"accuracy": 0.82}
            }"#,
        )
        .unwrap();
        assert_eq!(reports.best_model(), Some("B"));
    }

    #[test]
    fn best_model_tie_goes_to_first_seen() {
        let reports: ModelReportSet = serde_json::from_str(
            r#"{
                "First": {"accuracy": 0.85},
                "Second": {"accuracy": 0.85}
            }"#,
        )
        .unwrap();
        assert_eq!(reports.best_model(), Some("First"));
        assert_eq!(ModelReportSet::default().best_model(), None);
    }

    #[test]
    fn report_segments_parse_and_missing_key_is_none() {
        let report: ClassificationReport = serde_json::from_str(
            r#"{
                "accuracy": 0.84,
                "0": {"precision": 0.87, "recall": 0.95, "f1-score": 0.91, "support": 42741.0},
                "macro avg": {"precision": 0.55, "recall": 0.41, "f1-score": 0.43, "support": 50736.0}
            }"#,
        )
        .unwrap();

        let class0 = report.segment("0").unwrap();
        assert_eq!(class0.f1_score, 0.91);
        assert!(report.segment("1").is_none());
        assert!(report.segment("weighted avg").is_none());
    }

    #[test]
    fn prediction_input_serializes_backend_field_names() {
        let payload = serde_json::to_value(PredictionInput::default()).unwrap();
        assert_eq!(payload["BMI"], 25.0);
        assert_eq!(payload["Age"], 5);
        assert_eq!(payload["HighBP"], 0);
        assert_eq!(payload["PhysActivity"], 1);
    }

    #[test]
    fn form_validation_enforces_ranges() {
        assert!(PredictionInput::from_form("25.0", "5", "0", "0", "0", "1").is_ok());
        assert!(PredictionInput::from_form("9.9", "5", "0", "0", "0", "1").is_err());
        assert!(PredictionInput::from_form("60.1", "5", "0", "0", "0", "1").is_err());
        assert!(PredictionInput::from_form("25.0", "0", "0", "0", "0", "1").is_err());
        assert!(PredictionInput::from_form("25.0", "14", "0", "0", "0", "1").is_err());
        assert!(PredictionInput::from_form("25.0", "5.5", "0", "0", "0", "1").is_err());
        assert!(PredictionInput::from_form("not a number", "5", "0", "0", "0", "1").is_err());
        assert!(PredictionInput::from_form("25.0", "5", "2", "0", "0", "1").is_err());
    }

    #[test]
    fn result_parses_with_optional_fields_absent() {
        let result: PredictionResult = serde_json::from_str(
            r#"{"prediction": 0, "prediction_label": "Low Risk", "confidence_score": 0.92}"#,
        )
        .unwrap();
        assert_eq!(result.prediction_label, "Low Risk");
        assert_eq!(result.confidence_score, Some(0.92));
        assert!(result.recommendation.is_none());
        assert_eq!(result.tier(), RiskTier::Low);
    }

    #[test]
    fn risk_tier_covers_unknown_classes() {
        assert_eq!(RiskTier::from_class(0), RiskTier::Low);
        assert_eq!(RiskTier::from_class(1), RiskTier::Medium);
        assert_eq!(RiskTier::from_class(2), RiskTier::High);
        assert_eq!(RiskTier::from_class(3), RiskTier::Unknown);
        assert_eq!(RiskTier::from_class(-1), RiskTier::Unknown);
    }

    #[test]
    fn correlation_cell_lookup_handles_ragged_matrix() {
        let matrix = CorrelationMatrix {
            labels: vec!["BMI".to_string(), "Age".to_string()],
            matrix: vec![vec![1.0, 0.3]],
        };
        assert_eq!(matrix.cell(0, 1), Some(0.3));
        assert_eq!(matrix.cell(1, 0), None);
        assert_eq!(matrix.cell(0, 5), None);
    }
}
