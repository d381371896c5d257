//! Prediction Card Component
//!
//! The current recommendation and the inputs it was based on. Hidden until
//! the first successful submission.

use leptos::*;

use crate::state::global::{GlobalState, PredictionResult};

/// Confidence as a percentage with two decimals, e.g. 0.87 → "87.00"
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}", confidence * 100.0)
}

/// Prediction section; renders only while the panel is open
#[component]
pub fn PredictionCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        if !state.show_prediction.get() {
            return None;
        }
        state
            .prediction
            .get()
            .map(|result| view! { <PredictionBody result=result /> })
    }
}

#[component]
fn PredictionBody(result: PredictionResult) -> impl IntoView {
    view! {
        <div class="prediction-section">
            <h2>"Current Prediction"</h2>
            <div class="prediction-card">
                <h3>"Recommended Crop: " {result.prediction.clone()}</h3>
                <p>"Confidence: " {format_confidence(result.confidence)} "%"</p>
                <div class="prediction-details">
                    <p>"Based on:"</p>
                    <ul>
                        <li>"Soil Type: " {result.soil_type.as_str()}</li>
                        <li>"Weather: " {result.weather.as_str()}</li>
                        <li>"Region: " {result.region.as_str()}</li>
                        <li>"Temperature: " {result.temperature} "°C"</li>
                        <li>"Humidity: " {result.humidity} "%"</li>
                        <li>"Soil Moisture: " {result.moisture}</li>
                        <li>"pH Level: " {result.ph}</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.87), "87.00");
        assert_eq!(format_confidence(1.0), "100.00");
        assert_eq!(format_confidence(0.5), "50.00");
    }
}
