//! Hourly time-series forecasting for operational dashboards.

use std::f64::consts::PI;

use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::Serialize;

use aerosense_core::{derive, round_to};

pub const MODEL: &str = "Fourier seasonality + seeded residuals";

/// Hard cap on the forecast horizon (one week of hourly points).
const MAX_HORIZON_HOURS: u32 = 168;

/// Half-width of the reported confidence interval, as a fraction of the
/// forecast value.
const CONFIDENCE_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub time: DateTime<FixedOffset>,
    pub value: f64,
    pub confidence_interval: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub context: String,
    pub forecast: Vec<ForecastPoint>,
    pub model: &'static str,
}

/// Daily seasonality: a morning/evening sine with a midday cosine ripple.
pub fn seasonal_component(hour: u32) -> f64 {
    ((hour as f64 - 4.0) * PI / 12.0).sin() * 0.5
        + 0.3 * ((hour as f64 - 12.0) * PI / 6.0).cos()
}

/// Forecast `horizon_hours` hourly points starting at `now`.
///
/// Known contexts are `"passenger_flow"` and `"revenue"`; anything else
/// falls back to the bare seasonal magnitude. Residual noise is seeded by
/// hour and offset, so the same clock input reproduces the same series.
pub fn predict(context: &str, horizon_hours: u32, now: DateTime<FixedOffset>) -> Forecast {
    let horizon = horizon_hours.min(MAX_HORIZON_HOURS);

    let mut points = Vec::with_capacity(horizon as usize);
    for i in 0..horizon {
        let at = now + Duration::hours(i64::from(i));
        let hour = at.hour();
        let season = seasonal_component(hour);

        let value = match context {
            "passenger_flow" => {
                let flow = 800.0
                    + season * 1500.0
                    + derive(&format!("flow{hour}{i}"), -50.0, 50.0)
                    + f64::from(hour) * 10.0;
                flow.trunc()
            }
            "revenue" => round_to(
                3000.0 + season * 6000.0 + derive(&format!("rev{hour}{i}"), -200.0, 200.0),
                2,
            ),
            _ => season.abs(),
        };

        let half_width = value.abs() * CONFIDENCE_MARGIN;
        points.push(ForecastPoint {
            time: at,
            value,
            confidence_interval: [round_to(value - half_width, 2), round_to(value + half_width, 2)],
        });
    }

    Forecast {
        context: context.to_string(),
        forecast: points,
        model: MODEL,
    }
}
