//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod fault_boundary;
pub mod farmer_input;
pub mod prediction_card;
pub mod status_card;
pub mod toast;

pub use chart::Chart;
pub use fault_boundary::FaultBoundary;
pub use farmer_input::FarmerInput;
pub use prediction_card::PredictionCard;
pub use status_card::StatusCard;
pub use toast::Toast;
