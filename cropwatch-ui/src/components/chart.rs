//! Chart Component
//!
//! Sensor history line chart using HTML5 Canvas. One label per reading, four
//! index-aligned series.

use leptos::*;
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::fault_boundary::{ComponentError, ComponentPath};
use crate::state::global::{parse_timestamp, GlobalState, SensorReading};

/// Series names and colors, in series order
const SERIES: [(&str, &str); 4] = [
    ("Temperature (°C)", "rgb(255, 99, 132)"),
    ("Humidity (%)", "rgb(53, 162, 235)"),
    ("Soil Moisture", "rgb(75, 192, 192)"),
    ("pH Level", "rgb(153, 102, 255)"),
];

/// Labels plus four series of equal length
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: [Vec<f64>; 4],
}

/// Adapt sensor history for the chart; values pass through in order
pub fn chart_data(readings: &[SensorReading]) -> ChartData {
    let column = |f: fn(&SensorReading) -> f64| readings.iter().map(f).collect::<Vec<_>>();

    ChartData {
        labels: readings.iter().map(|r| time_label(&r.timestamp)).collect(),
        series: [
            column(|r| r.temperature),
            column(|r| r.humidity),
            column(|r| r.moisture),
            column(|r| r.ph),
        ],
    }
}

/// Local time of day, or the raw string if it does not parse
pub fn time_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.with_timezone(&chrono::Local).format("%H:%M:%S").to_string(),
        None => raw.to_string(),
    }
}

/// Canvas could not be drawn
#[derive(Clone, Debug)]
pub struct ChartError(String);

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chart error: {}", self.0)
    }
}

impl std::error::Error for ChartError {}

/// Sensor history chart component
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let path = ComponentPath::enter("Chart");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let failure = create_rw_signal(None::<ComponentError>);

    // Redraw chart when the history changes
    create_effect(move |_| {
        let data = chart_data(&state.sensor_history.get());

        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = draw_chart(&canvas, &data) {
                failure.set(Some(ComponentError::new(path.clone(), e.to_string())));
            }
        }
    });

    view! {
        <div class="chart-container">
            <h3 class="chart-title">"Sensor Data Over Time"</h3>
            <ChartLegend />
            <canvas node_ref=canvas_ref width="900" height="400" class="chart-canvas" />

            // Surfaces drawing failures to the fault boundary
            {move || failure.get().map_or(Ok(()), Err)}
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend() -> impl IntoView {
    view! {
        <div class="chart-legend">
            {SERIES
                .iter()
                .map(|(name, color)| view! {
                    <span class="legend-item">
                        <span class="legend-swatch" style=format!("background-color: {}", color) />
                        {*name}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, data: &ChartData) -> Result<(), ChartError> {
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| ChartError("2d context unavailable".to_string()))?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if data.labels.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No sensor data yet", width / 2.0 - 70.0, height / 2.0);
        return Ok(());
    }

    // Shared y-axis across all series
    let (mut y_min, mut y_max) = data
        .series
        .iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if !y_min.is_finite() {
        return Err(ChartError("no finite values".to_string()));
    }

    // Add padding to y range
    let y_range = y_max - y_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    y_min -= y_padding;
    y_max += y_padding;

    // Draw grid lines
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let points = data.labels.len();
    let x_at = |i: usize| {
        if points == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (points - 1) as f64) * chart_width
        }
    };
    let y_at = |v: f64| margin_top + ((y_max - v) / (y_max - y_min)) * chart_height;

    // Draw each data series
    for (values, (_, color)) in data.series.iter().zip(SERIES.iter()) {
        ctx.set_stroke_style(&(*color).into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, &v) in values.iter().enumerate() {
            if i == 0 {
                ctx.move_to(x_at(i), y_at(v));
            } else {
                ctx.line_to(x_at(i), y_at(v));
            }
        }
        ctx.stroke();
    }

    // Draw x-axis labels (at most 6)
    ctx.set_fill_style(&"#6b7280".into());
    let step = (points / 6).max(1);
    for i in (0..points).step_by(step) {
        let _ = ctx.fill_text(&data.labels[i], x_at(i) - 25.0, height - 10.0);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(t: f64, ts: &str) -> SensorReading {
        SensorReading {
            id: None,
            temperature: t,
            humidity: 50.0,
            moisture: 400.0,
            ph: 6.5,
            timestamp: ts.to_string(),
        }
    }

    #[test]
    fn test_empty_history() {
        let data = chart_data(&[]);
        assert!(data.labels.is_empty());
        assert!(data.series.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_series_aligned_and_in_order() {
        let readings = vec![
            reading(30.0, "2024-03-15T12:00:00"),
            reading(10.0, "bogus"),
            reading(20.0, "2024-03-15T12:01:00Z"),
        ];

        let data = chart_data(&readings);

        assert_eq!(data.labels.len(), 3);
        assert!(data.series.iter().all(|s| s.len() == 3));
        assert_eq!(data.series[0], vec![30.0, 10.0, 20.0]);
        assert_eq!(data.labels[1], "bogus");
    }
}
