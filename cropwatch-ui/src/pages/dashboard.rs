//! Dashboard Page
//!
//! Status, farm details form, current prediction and sensor chart.
//!
//! Status and sensor history are polled immediately on mount and then every
//! 30 seconds. The interval is dropped on cleanup, and responses that land
//! after cleanup are discarded.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;
use crate::components::fault_boundary::ComponentPath;
use crate::components::{Chart, FarmerInput, PredictionCard, StatusCard};
use crate::state::global::{GlobalState, PredictionRequest};

/// Refresh period for status and sensor history
const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    ComponentPath::enter("Dashboard");

    // Cleared on unmount; completion handlers check it before touching state
    let alive = Rc::new(Cell::new(true));

    poll(state, Rc::clone(&alive));
    let interval = {
        let alive = Rc::clone(&alive);
        gloo_timers::callback::Interval::new(REFRESH_INTERVAL_MS, move || {
            poll(state, Rc::clone(&alive));
        })
    };

    {
        let alive = Rc::clone(&alive);
        on_cleanup(move || {
            alive.set(false);
            drop(interval);
        });
    }

    let on_submit = move |request: PredictionRequest| {
        let alive = Rc::clone(&alive);
        spawn_local(async move {
            match api::submit_prediction(&request).await {
                Ok(result) if alive.get() => state.record_prediction(result),
                Ok(_) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("Error getting prediction: {}", e).into());
                    if alive.get() {
                        state.show_error(&format!("Prediction failed: {}", e));
                    }
                }
            }
        });
    };

    view! {
        <div class="dashboard">
            <h1>"Crop Recommendation System Dashboard"</h1>

            <StatusCard />

            <div class="input-section">
                <FarmerInput on_submit=on_submit />
            </div>

            <PredictionCard />

            <div class="charts-section">
                <h2>"Sensor Data History"</h2>
                <Chart />
            </div>
        </div>
    }
}

/// Issue both reads; each updates only its own slice
fn poll(state: GlobalState, alive: Rc<Cell<bool>>) {
    let status_alive = Rc::clone(&alive);
    spawn_local(async move {
        match api::fetch_system_status().await {
            Ok(status) if status_alive.get() => state.system_status.set(Some(status)),
            Ok(_) => {}
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching system status: {}", e).into());
            }
        }
    });

    spawn_local(async move {
        match api::fetch_sensor_history().await {
            Ok(readings) if alive.get() => state.sensor_history.set(readings),
            Ok(_) => {}
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching sensor data: {}", e).into());
            }
        }
    });
}
