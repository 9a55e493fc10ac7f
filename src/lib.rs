//! # bounded-forecast
//!
//! Baseline forecasting and invertible bounded transforms for time series.
//!
//! Provides the last-value baseline forecaster together with the scaled
//! logit transform family, which maps data with known limits onto the real
//! line so that forecasts produced in transformed space land back inside
//! those limits after inversion.

pub mod core;
pub mod error;
pub mod models;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, TimeSeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::baseline::LastValue;
    pub use crate::models::Forecaster;
    pub use crate::transform::{ScaledLogit, SeriesTransformer};
}
