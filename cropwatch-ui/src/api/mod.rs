//! API Access
//!
//! HTTP calls to the crop recommendation service.

mod client;

pub use client::{fetch_sensor_history, fetch_system_status, get_api_base, submit_prediction};
