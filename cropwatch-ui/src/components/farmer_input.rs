//! Farmer Input Component
//!
//! Form for soil type, weather and region. All three selects start on their
//! placeholder and are required; the request is only emitted once every one
//! has a value.

use leptos::*;

use crate::state::global::{PredictionRequest, Region, SoilType, Weather};

/// The request the selections describe, if none is left on its placeholder
pub fn build_request(soil_type: &str, weather: &str, region: &str) -> Option<PredictionRequest> {
    Some(PredictionRequest {
        soil_type: SoilType::from_wire(soil_type)?,
        weather: Weather::from_wire(weather)?,
        region: Region::from_wire(region)?,
    })
}

/// Farm details form component
#[component]
pub fn FarmerInput(
    /// Receives the completed request
    #[prop(into)]
    on_submit: Callback<PredictionRequest>,
) -> impl IntoView {
    let (soil_type, set_soil_type) = create_signal(String::new());
    let (weather, set_weather) = create_signal(String::new());
    let (region, set_region) = create_signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if let Some(request) = build_request(&soil_type.get(), &weather.get(), &region.get()) {
            on_submit.call(request);
        }
    };

    view! {
        <div class="farmer-input">
            <h2>"Enter Farm Details"</h2>
            <form on:submit=submit>
                <ChoiceSelect
                    id="soil_type"
                    label="Soil Type:"
                    placeholder="Select Soil Type"
                    options={SoilType::ALL.iter().map(|c| (c.as_str(), c.label())).collect::<Vec<_>>()}
                    value=soil_type
                    set_value=set_soil_type
                />
                <ChoiceSelect
                    id="weather"
                    label="Weather Condition:"
                    placeholder="Select Weather"
                    options={Weather::ALL.iter().map(|c| (c.as_str(), c.label())).collect::<Vec<_>>()}
                    value=weather
                    set_value=set_weather
                />
                <ChoiceSelect
                    id="region"
                    label="Region:"
                    placeholder="Select Region"
                    options={Region::ALL.iter().map(|c| (c.as_str(), c.label())).collect::<Vec<_>>()}
                    value=region
                    set_value=set_region
                />

                <button type="submit" class="submit-button">
                    "Get Crop Recommendation"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ChoiceSelect(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(&'static str, &'static str)>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                name=id
                required=true
                prop:value=move || value.get()
                on:change=move |ev| set_value.set(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(v, text)| view! { <option value=v>{text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_blocks_request() {
        assert_eq!(build_request("", "sunny", "north"), None);
        assert_eq!(build_request("clay", "", "north"), None);
        assert_eq!(build_request("clay", "sunny", ""), None);
    }

    #[test]
    fn test_complete_selection() {
        let request = build_request("clay", "partly_cloudy", "central").unwrap();
        assert_eq!(request.weather, Weather::PartlyCloudy);
        assert_eq!(request.region, Region::Central);
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert_eq!(build_request("gravel", "sunny", "north"), None);
    }
}
