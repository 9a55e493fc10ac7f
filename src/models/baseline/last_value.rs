//! Last-value forecasting model.
//!
//! Forecasts the most recently observed value for all future periods.

use crate::core::{Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::quantile_normal;

/// Forecaster that repeats the last observed training value.
///
/// Fitting retains only the final element of the training series; every
/// predicted step is that value. Exogenous covariates the host pipeline may
/// carry are ignored. The stateless [`LastValue::forecast`] shortcut reads
/// the last element directly without fitting.
#[derive(Debug, Clone, Default)]
pub struct LastValue {
    last_value: Option<f64>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl LastValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forecast the next value of a series without fitting a model.
    ///
    /// Equivalent to `fit` followed by a one-step `predict`, but persists
    /// no state.
    pub fn forecast(series: &TimeSeries) -> Result<f64> {
        series
            .primary_values()
            .last()
            .copied()
            .ok_or(ForecastError::EmptyData)
    }
}

impl Forecaster for LastValue {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        let values = series.primary_values();
        let last = *values.last().ok_or(ForecastError::EmptyData)?;

        self.last_value = Some(last);

        // Fitted values are shifted history (y_hat[t] = y[t-1])
        let mut fitted = vec![f64::NAN];
        fitted.extend_from_slice(&values[..values.len() - 1]);

        // Residuals are first differences (y[t] - y[t-1])
        let mut residuals = vec![f64::NAN];
        residuals.extend(values.windows(2).map(|w| w[1] - w[0]));

        self.fitted = Some(fitted);
        self.residuals = Some(residuals);

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let last = self.last_value.ok_or(ForecastError::FitRequired)?;
        Ok(Forecast::from_values(vec![last; horizon]))
    }

    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast> {
        let last = self.last_value.ok_or(ForecastError::FitRequired)?;
        let residuals = self.residuals.as_ref().ok_or(ForecastError::FitRequired)?;

        if horizon == 0 {
            return Ok(Forecast::new());
        }

        let valid: Vec<f64> = residuals.iter().copied().filter(|r| !r.is_nan()).collect();
        if valid.is_empty() {
            return Ok(Forecast::from_values(vec![last; horizon]));
        }

        let variance = valid.iter().map(|r| r * r).sum::<f64>() / valid.len() as f64;
        let sigma = variance.sqrt();
        let z = quantile_normal((1.0 + level) / 2.0);

        let point = vec![last; horizon];
        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);

        for h in 1..=horizon {
            // Interval widens with sqrt(horizon)
            let se = sigma * (h as f64).sqrt();
            lower.push(last - z * se);
            upper.push(last + z * se);
        }

        Ok(Forecast::from_values_with_intervals(point, lower, upper))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "LastValue"
    }
}
