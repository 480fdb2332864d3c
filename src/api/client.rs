//! HTTP API Client
//!
//! Functions for communicating with the prediction service REST API. The
//! base URL is resolved once at application start and passed explicitly
//! into every request function.

use gloo_net::http::Request;

use crate::api::types::{
    AnalyticsSnapshot, ModelReportSet, PredictionInput, PredictionResult,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local-storage key holding an API base URL override
const API_BASE_STORAGE_KEY: &str = "diabetes_ai_api_url";

/// API base URL, resolved once at startup and provided through context.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiBase(pub String);

/// Resolve the API base URL from local storage or use the default.
///
/// Called once from the app root; views receive the result through
/// context instead of re-reading ambient state.
pub fn resolve_api_base() -> ApiBase {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten());

    ApiBase(base_from(stored))
}

/// Stored override if present, else the default, with the trailing slash
/// normalized away.
fn base_from(stored: Option<String>) -> String {
    stored
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Fetch aggregate dataset analytics for the dashboard
pub async fn fetch_analytics(api_base: &str) -> Result<AnalyticsSnapshot, String> {
    let response = Request::get(&format!("{}/dashboard/analytics", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch classification reports for all trained models
pub async fn fetch_model_reports(api_base: &str) -> Result<ModelReportSet, String> {
    let response = Request::get(&format!("{}/models/performance", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a prediction request with the current form snapshot
pub async fn submit_prediction(
    api_base: &str,
    input: &PredictionInput,
) -> Result<PredictionResult, String> {
    let response = Request::post(&format!("{}/predict", api_base))
        .json(input)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Prediction failed".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_falls_back_to_default() {
        assert_eq!(base_from(None), DEFAULT_API_BASE);
    }

    #[test]
    fn base_override_is_normalized() {
        assert_eq!(
            base_from(Some("http://api.example.com/".to_string())),
            "http://api.example.com"
        );
        assert_eq!(
            base_from(Some("http://api.example.com".to_string())),
            "http://api.example.com"
        );
    }
}
