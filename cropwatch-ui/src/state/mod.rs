//! State Management
//!
//! Global application state and the service's wire records.

pub mod global;

pub use global::{
    parse_timestamp, provide_global_state, GlobalState, PredictionRequest, PredictionResult,
    Region, SensorReading, SoilType, StatusKind, SystemStatus, Weather,
};
