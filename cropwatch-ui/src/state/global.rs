//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the wire records the
//! service exchanges.

use leptos::*;
use serde::{Deserialize, Serialize};

/// One environmental reading from `/api/sensor-data`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SensorReading {
    #[serde(default)]
    pub id: Option<i64>,
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub ph: f64,
    pub timestamp: String,
}

impl SensorReading {
    /// Reject readings the chart cannot plot
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("moisture", self.moisture),
            ("ph", self.ph),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("field '{}' is not a finite number", name));
        }
        if self.timestamp.trim().is_empty() {
            return Err("reading has no timestamp".to_string());
        }
        Ok(())
    }
}

/// Parse a backend timestamp: RFC 3339, or the naive form read as UTC
pub fn parse_timestamp(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&chrono::Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Latest values the backend saw, any of which may be missing
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SensorSnapshot {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub moisture: Option<f64>,
    #[serde(default)]
    pub ph: Option<f64>,
}

/// Health state reported by the backend
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Online,
    Offline,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Online => "online",
            StatusKind::Offline => "offline",
            StatusKind::Error => "error",
        }
    }
}

/// Body of `/api/system-status`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SystemStatus {
    pub status: StatusKind,
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub sensor_status: Option<SensorSnapshot>,
}

/// Closed set of form choices: wire names, labels and serde in one place
macro_rules! choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All choices in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Choice with this wire name
            pub fn from_wire(value: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|c| c.as_str() == value)
            }
        }
    };
}

choice!(
    /// Soil classification
    SoilType {
        Clay => ("clay", "Clay"),
        Sandy => ("sandy", "Sandy"),
        Loamy => ("loamy", "Loamy"),
        Silt => ("silt", "Silt"),
    }
);

choice!(
    /// Current weather condition
    Weather {
        Sunny => ("sunny", "Sunny"),
        Rainy => ("rainy", "Rainy"),
        Cloudy => ("cloudy", "Cloudy"),
        PartlyCloudy => ("partly_cloudy", "Partly Cloudy"),
    }
);

choice!(
    /// Farm region
    Region {
        North => ("north", "North"),
        South => ("south", "South"),
        East => ("east", "East"),
        West => ("west", "West"),
        Central => ("central", "Central"),
    }
);

/// Body of `POST /api/predict`
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PredictionRequest {
    pub soil_type: SoilType,
    pub weather: Weather,
    pub region: Region,
}

/// Crop recommendation returned by the service
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PredictionResult {
    pub prediction: String,
    pub confidence: f64,
    pub soil_type: SoilType,
    pub weather: Weather,
    pub region: Region,
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub ph: f64,
}

impl PredictionResult {
    /// Reject results the prediction card cannot show
    pub fn validate(&self) -> Result<(), String> {
        if self.prediction.trim().is_empty() {
            return Err("prediction is empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence {} outside [0, 1]", self.confidence));
        }
        Ok(())
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Latest sensor history, replaced on every successful poll
    pub sensor_history: RwSignal<Vec<SensorReading>>,
    /// Latest system status; `None` until the first successful poll
    pub system_status: RwSignal<Option<SystemStatus>>,
    /// Last successful prediction
    pub prediction: RwSignal<Option<PredictionResult>>,
    /// Whether the prediction panel is open
    pub show_prediction: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        sensor_history: create_rw_signal(Vec::new()),
        system_status: create_rw_signal(None),
        prediction: create_rw_signal(None),
        show_prediction: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Store a prediction and open the panel in the same batch
    pub fn record_prediction(&self, result: PredictionResult) {
        batch(|| {
            self.prediction.set(Some(result));
            self.show_prediction.set(true);
        });
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction_json(prediction: &str, confidence: f64) -> String {
        format!(
            r#"{{"prediction": "{}", "confidence": {}, "soil_type": "clay", "weather": "partly_cloudy",
                "region": "north", "temperature": 25.5, "humidity": 60.0, "moisture": 500, "ph": 6.5}}"#,
            prediction, confidence
        )
    }

    #[test]
    fn test_status_accepts_backend_shape() {
        let status: SystemStatus = serde_json::from_str(
            r#"{"id": 3, "timestamp": "2024-03-15T12:00:00", "status": "error",
                "message": "Sensor data is not recent",
                "sensor_status": {"temperature": null, "humidity": 60.0, "moisture": null, "ph": null}}"#,
        )
        .unwrap();

        assert_eq!(status.status, StatusKind::Error);
        assert_eq!(status.sensor_status.unwrap().humidity, Some(60.0));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{"status": "degraded", "message": "", "timestamp": "2024-03-15T12:00:00"}"#;
        assert!(serde_json::from_str::<SystemStatus>(json).is_err());
    }

    #[test]
    fn test_request_wire_shape() {
        let request = PredictionRequest {
            soil_type: SoilType::Clay,
            weather: Weather::PartlyCloudy,
            region: Region::North,
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({"soil_type": "clay", "weather": "partly_cloudy", "region": "north"})
        );
    }

    #[test]
    fn test_prediction_validation() {
        let ok: PredictionResult = serde_json::from_str(&prediction_json("rice", 0.87)).unwrap();
        assert_eq!(ok.weather, Weather::PartlyCloudy);
        assert!(ok.validate().is_ok());

        let empty: PredictionResult = serde_json::from_str(&prediction_json("  ", 0.87)).unwrap();
        assert_eq!(empty.validate().unwrap_err(), "prediction is empty");

        let over: PredictionResult = serde_json::from_str(&prediction_json("rice", 1.5)).unwrap();
        assert!(over.validate().unwrap_err().contains("1.5"));

        let gravel = prediction_json("rice", 0.5).replace("clay", "gravel");
        assert!(serde_json::from_str::<PredictionResult>(&gravel).is_err());
    }

    #[test]
    fn test_reading_validation() {
        let mut reading = SensorReading {
            id: None,
            temperature: 25.5,
            humidity: 60.0,
            moisture: 500.0,
            ph: 6.5,
            timestamp: "2024-03-15T12:00:00".to_string(),
        };
        assert!(reading.validate().is_ok());

        reading.ph = f64::NAN;
        assert!(reading.validate().unwrap_err().contains("ph"));

        reading.ph = 6.5;
        reading.timestamp = " ".to_string();
        assert!(reading.validate().is_err());
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let rfc = parse_timestamp("2024-03-15T12:00:00Z").unwrap();
        let naive = parse_timestamp("2024-03-15T12:00:00.000000").unwrap();
        assert_eq!(rfc, naive);
        assert!(parse_timestamp("bogus").is_none());
    }

    #[test]
    fn test_choice_wire_names() {
        assert_eq!(Weather::from_wire("partly_cloudy"), Some(Weather::PartlyCloudy));
        assert_eq!(Region::from_wire("Central"), None);
        assert_eq!(SoilType::ALL.len(), 4);
        assert_eq!(Region::Central.label(), "Central");
    }
}
