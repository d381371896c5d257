//! HTTP API Client
//!
//! Functions for communicating with the crop recommendation service.
//! Anything other than a 200 with a decodable, valid body is an error string.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::state::global::{PredictionRequest, PredictionResult, SensorReading, SystemStatus};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Local storage key overriding the base URL
const API_BASE_KEY: &str = "cropwatch_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Fetch the sensor history
pub async fn fetch_sensor_history() -> Result<Vec<SensorReading>, String> {
    let response = Request::get(&format!("{}/api/sensor-data", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let readings: Vec<SensorReading> = decode(response).await?;
    for reading in &readings {
        reading.validate().map_err(malformed)?;
    }
    Ok(readings)
}

/// Fetch the current system status
pub async fn fetch_system_status() -> Result<SystemStatus, String> {
    let response = Request::get(&format!("{}/api/system-status", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    decode(response).await
}

/// Submit farm details for a crop recommendation
pub async fn submit_prediction(request: &PredictionRequest) -> Result<PredictionResult, String> {
    let response = Request::post(&format!("{}/api/predict", get_api_base()))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let result: PredictionResult = decode(response).await?;
    result.validate().map_err(malformed)?;
    Ok(result)
}

fn malformed(reason: String) -> String {
    format!("Malformed response: {}", reason)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.status() != 200 {
        let status = response.status();
        let error = response
            .json::<ApiError>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, error));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
