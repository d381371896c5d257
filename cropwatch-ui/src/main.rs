//! Cropwatch Dashboard
//!
//! Browser dashboard for the crop recommendation service, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Live system status, refreshed every 30 seconds
//! - Sensor history chart (temperature, humidity, soil moisture, pH)
//! - Farm details form for crop recommendations
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the service over plain HTTP; the base URL comes
//! from `localStorage["cropwatch_api_url"]`, default `http://localhost:5000`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
