//! Forecasting within limits example.
//!
//! Run with: cargo run --example forecast_within_bounds
//!
//! Maps a percentage series onto the real line with the scaled logit
//! transform, forecasts in transformed space, and inverts the forecast so
//! that point predictions and intervals land back inside (0, 100).

use bounded_forecast::core::TimeSeries;
use bounded_forecast::models::baseline::LastValue;
use bounded_forecast::models::Forecaster;
use bounded_forecast::transform::{inv_scaled_logit, ScaledLogit};
use chrono::{Duration, TimeZone, Utc};

fn main() {
    println!("=== Forecasting Within Limits Example ===\n");

    // Utilization percentages climbing toward the ceiling
    let timestamps: Vec<_> = (0..24)
        .map(|i| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::hours(i))
        .collect();
    let values: Vec<f64> = (0..24).map(|i| 55.0 + 40.0 * (i as f64 / 23.0)).collect();

    let ts = TimeSeries::univariate(timestamps, values.clone()).unwrap();
    println!("Data: {} observations in (0, 100)", ts.len());
    println!("Last 3 values: {:?}\n", &values[21..]);

    // Map onto the real line
    let transform = ScaledLogit::bounded(0.0, 100.0);
    let unbounded = transform.transform_series(&ts).unwrap();

    // Forecast in transformed space
    let mut model = LastValue::new();
    model.fit(&unbounded).unwrap();
    let forecast = model.predict_with_intervals(5, 0.95).unwrap();

    // Invert point forecast and intervals back inside the bounds
    let bounds = (transform.lower_bound(), transform.upper_bound());
    let point = inv_scaled_logit(forecast.point(), bounds.0, bounds.1);
    let lower = inv_scaled_logit(forecast.lower().unwrap(), bounds.0, bounds.1);
    let upper = inv_scaled_logit(forecast.upper().unwrap(), bounds.0, bounds.1);

    println!("5-step forecast with 95% intervals, all within (0, 100):");
    println!("{:>4} {:>10} {:>10} {:>10}", "h", "Lower", "Forecast", "Upper");
    for i in 0..point.len() {
        println!(
            "{:>4} {:>10.2} {:>10.2} {:>10.2}",
            i + 1,
            lower[i],
            point[i],
            upper[i]
        );
    }
}
