//! Status Card Component
//!
//! Shows the backend's reported status verbatim, its message, and when it
//! was reported.

use leptos::*;

use crate::state::global::{parse_timestamp, GlobalState, SystemStatus};

/// System status section; the card appears after the first successful poll
#[component]
pub fn StatusCard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="status-section">
            <h2>"System Status"</h2>
            {move || state.system_status.get().map(|status| view! { <StatusBody status=status /> })}
        </div>
    }
}

#[component]
fn StatusBody(status: SystemStatus) -> impl IntoView {
    let sensors = status.sensor_status.clone().map(|s| {
        let fmt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string());
        format!(
            "Sensors: {}°C, {}%, moisture {}, pH {}",
            fmt(s.temperature),
            fmt(s.humidity),
            fmt(s.moisture),
            fmt(s.ph)
        )
    });

    view! {
        <div class=format!("status-card {}", status.status.as_str())>
            <p>"Status: " {status.status.as_str()}</p>
            <p>"Message: " {status.message.clone()}</p>
            <p>"Last Updated: " {local_time(&status.timestamp)}</p>
            {sensors.map(|line| view! { <p class="sensor-line">{line}</p> })}
        </div>
    }
}

/// Backend timestamp (UTC, offset optional) as local date and time
pub fn local_time(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => raw.to_string(),
    }
}
