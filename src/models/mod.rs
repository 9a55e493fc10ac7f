//! Forecasting models.

mod traits;

pub mod baseline;

pub use traits::{BoxedForecaster, Forecaster};
