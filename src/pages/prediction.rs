//! Prediction Page
//!
//! Risk-prediction form: local editable state, one request per submission,
//! result panel with a severity treatment keyed by the predicted class.

use leptos::*;

use crate::api;
use crate::api::types::{PredictionInput, PredictionResult, RiskTier, AGE_RANGE, BMI_RANGE};
use crate::api::ApiBase;
use crate::state::{FetchState, Notifications};

/// Prediction page component
#[component]
pub fn Prediction() -> impl IntoView {
    let notifications = use_context::<Notifications>().expect("Notifications not found");
    let api_base = use_context::<ApiBase>().expect("ApiBase not found");

    let defaults = PredictionInput::default();
    let bmi = create_rw_signal(defaults.bmi.to_string());
    let age = create_rw_signal(defaults.age.to_string());
    let high_bp = create_rw_signal(defaults.high_bp.to_string());
    let high_chol = create_rw_signal(defaults.high_chol.to_string());
    let smoker = create_rw_signal(defaults.smoker.to_string());
    let phys_activity = create_rw_signal(defaults.phys_activity.to_string());

    let result = create_rw_signal(FetchState::<PredictionResult>::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = match PredictionInput::from_form(
            &bmi.get(),
            &age.get(),
            &high_bp.get(),
            &high_chol.get(),
            &smoker.get(),
            &phys_activity.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                notifications.show_error(&message);
                return;
            }
        };

        // Clear the prior result and enter the submitting state
        result.update(|state| state.begin());

        let base = api_base.0.clone();
        spawn_local(async move {
            let outcome = api::submit_prediction(&base, &input).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Error making prediction: {}", e).into());
            }
            result.update(|state| state.resolve(outcome));
        });
    };

    view! {
        <div>
            <h1 class="text-3xl font-bold text-gray-800 mb-2">"Diabetes Risk Prediction"</h1>
            <p class="text-gray-600 mb-8">
                "Fill in the details below to predict the risk of diabetes."
            </p>

            <div class="max-w-2xl mx-auto">
                <div class="bg-white rounded-lg shadow-md p-8">
                    <form on:submit=on_submit>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <label for="bmi" class="block text-sm font-medium text-gray-700 mb-1">
                                    {format!("BMI ({:.0}-{:.0})", BMI_RANGE.0, BMI_RANGE.1)}
                                </label>
                                <input
                                    type="number"
                                    id="bmi"
                                    step="0.1"
                                    min=BMI_RANGE.0
                                    max=BMI_RANGE.1
                                    required
                                    prop:value=move || bmi.get()
                                    on:input=move |ev| bmi.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm
                                           focus:outline-none focus:ring-2 focus:ring-blue-500"
                                />
                            </div>
                            <div>
                                <label for="age" class="block text-sm font-medium text-gray-700 mb-1">
                                    {format!("Age Category ({}-{})", AGE_RANGE.0, AGE_RANGE.1)}
                                </label>
                                <input
                                    type="number"
                                    id="age"
                                    min=AGE_RANGE.0
                                    max=AGE_RANGE.1
                                    required
                                    prop:value=move || age.get()
                                    on:input=move |ev| age.set(event_target_value(&ev))
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm
                                           focus:outline-none focus:ring-2 focus:ring-blue-500"
                                />
                            </div>
                            <YesNoField label="High Blood Pressure" value=high_bp />
                            <YesNoField label="High Cholesterol" value=high_chol />
                            <YesNoField label="Smoker" value=smoker />
                            <YesNoField label="Physical Activity" value=phys_activity />
                        </div>

                        <div class="mt-8">
                            <button
                                type="submit"
                                disabled=move || result.get().is_pending()
                                class="w-full bg-blue-600 text-white font-bold py-3 px-4 rounded-lg
                                       hover:bg-blue-700 transition-colors duration-200 disabled:bg-blue-300"
                            >
                                {move || if result.get().is_pending() {
                                    "Predicting..."
                                } else {
                                    "Predict Risk"
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                {move || match result.get() {
                    FetchState::Idle | FetchState::Loading => ().into_view(),
                    FetchState::Failed(message) => view! {
                        <div class="mt-6 p-4 rounded-lg text-center bg-red-100 text-red-800">
                            <h3 class="font-bold text-lg">"Prediction failed"</h3>
                            <p>{message}</p>
                            <p class="text-sm mt-1">"Check the backend connection and try again."</p>
                        </div>
                    }
                    .into_view(),
                    FetchState::Loaded(result) => view! {
                        <ResultPanel result=result />
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

/// Yes/No select bound to a "0"/"1" form signal
#[component]
fn YesNoField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <select
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm
                       focus:outline-none focus:ring-2 focus:ring-blue-500"
            >
                <option value="0">"No"</option>
                <option value="1">"Yes"</option>
            </select>
        </div>
    }
}

/// Result panel with severity-toned treatment
#[component]
fn ResultPanel(result: PredictionResult) -> impl IntoView {
    let panel_class = format!(
        "mt-6 p-4 rounded-lg text-center {}",
        tier_classes(result.tier())
    );

    let heading = if result.prediction_label.is_empty() {
        result
            .risk_level
            .clone()
            .unwrap_or_else(|| "Prediction complete".to_string())
    } else {
        result.prediction_label.clone()
    };

    view! {
        <div class=panel_class>
            <h3 class="font-bold text-lg">{heading}</h3>
            {format_confidence(result.confidence_score).map(|text| view! {
                <p>"Model Confidence: " {text}</p>
            })}
            {result.recommendation.clone().map(|text| view! {
                <p class="mt-2 text-sm text-left whitespace-pre-wrap">{text}</p>
            })}
        </div>
    }
}

/// Panel color classes for a risk tier
fn tier_classes(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "bg-green-100 text-green-800",
        RiskTier::Medium => "bg-yellow-100 text-yellow-800",
        RiskTier::High => "bg-red-100 text-red-800",
        RiskTier::Unknown => "bg-gray-100 text-gray-800",
    }
}

/// Confidence fraction formatted as a percentage, when present
fn format_confidence(confidence: Option<f64>) -> Option<String> {
    confidence.map(|value| format!("{:.1}%", value * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_risk_gets_success_tone() {
        assert_eq!(tier_classes(RiskTier::Low), "bg-green-100 text-green-800");
        assert_eq!(tier_classes(RiskTier::High), "bg-red-100 text-red-800");
        assert_eq!(
            tier_classes(RiskTier::from_class(7)),
            "bg-gray-100 text-gray-800"
        );
    }

    #[test]
    fn confidence_formats_as_percentage() {
        assert_eq!(format_confidence(Some(0.92)), Some("92.0%".to_string()));
        assert_eq!(format_confidence(None), None);
    }
}
