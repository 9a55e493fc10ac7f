//! Data transformations for time series.
//!
//! Provides the scaled logit transform family for bounded data, along with
//! the [`SeriesTransformer`] lifecycle trait shared by elementwise
//! transforms.
//!
//! # Example
//!
//! ```
//! use bounded_forecast::transform::{ScaledLogit, SeriesTransformer};
//!
//! // Keep forecasts of a percentage series inside (0, 100)
//! let transform = ScaledLogit::bounded(0.0, 100.0);
//!
//! let data = vec![vec![12.0, 37.5, 80.0]];
//! let unbounded = transform.transform(&data);
//! let recovered = transform.inverse_transform(&unbounded);
//!
//! assert!((recovered[0][1] - 37.5).abs() < 1e-12);
//! ```

pub mod scaled_logit;

mod traits;

pub use scaled_logit::{inv_scaled_logit, scaled_logit, ScaledLogit};
pub use traits::SeriesTransformer;
