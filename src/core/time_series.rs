//! TimeSeries data structure for representing temporal data.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};

/// A time series with timestamps and one or more channels of values.
///
/// Values are stored channel-major: `values[channel][timepoint]`. Every
/// channel is an independent scalar series over the shared timestamps, so a
/// multivariate series is a 2-D payload with one axis indexing time points
/// and one indexing channels.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<Vec<f64>>,
}

impl TimeSeries {
    /// Create a univariate time series.
    pub fn univariate(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        Self::multivariate(timestamps, vec![values])
    }

    /// Create a multivariate time series from channel-major values.
    ///
    /// Every channel must have the same length as `timestamps`, and
    /// timestamps must be strictly increasing.
    pub fn multivariate(timestamps: Vec<DateTime<Utc>>, values: Vec<Vec<f64>>) -> Result<Self> {
        for window in timestamps.windows(2) {
            if window[1] <= window[0] {
                return Err(ForecastError::TimestampError(
                    "timestamps must be strictly increasing".to_string(),
                ));
            }
        }

        for channel in &values {
            if channel.len() != timestamps.len() {
                return Err(ForecastError::DimensionMismatch {
                    expected: timestamps.len(),
                    got: channel.len(),
                });
            }
        }

        Ok(Self { timestamps, values })
    }

    /// Build a new series with the same timestamps but different values.
    ///
    /// Used by transforms that map values while leaving time alone.
    pub fn with_values(&self, values: Vec<Vec<f64>>) -> Result<Self> {
        Self::multivariate(self.timestamps.clone(), values)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get the number of channels (1 for univariate).
    pub fn n_channels(&self) -> usize {
        self.values.len()
    }

    /// Check if the series has more than one channel.
    pub fn is_multivariate(&self) -> bool {
        self.values.len() > 1
    }

    /// Get timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get values for a specific channel.
    pub fn channel(&self, index: usize) -> Result<&[f64]> {
        self.values
            .get(index)
            .map(|v| v.as_slice())
            .ok_or(ForecastError::IndexOutOfBounds {
                index,
                size: self.values.len(),
            })
    }

    /// Get primary (first channel) values.
    pub fn primary_values(&self) -> &[f64] {
        self.values.first().map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Get all values organized by channel.
    pub fn channels(&self) -> &[Vec<f64>] {
        &self.values
    }
}
