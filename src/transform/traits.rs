//! Lifecycle trait for elementwise series transforms.

use crate::error::Result;

/// Common interface for elementwise series transforms.
///
/// Payloads are channel-major 2-D arrays (`x[channel][timepoint]`), but an
/// elementwise transform applies to each scalar independently, so the axis
/// convention carries no meaning and callers may pass data in either
/// orientation.
///
/// This trait is object-safe and can be used with `Box<dyn SeriesTransformer>`.
pub trait SeriesTransformer {
    /// Fit the transformer to the data.
    ///
    /// Stateless transforms keep this default no-op.
    fn fit(&mut self, x: &[Vec<f64>]) -> Result<()> {
        let _ = x;
        Ok(())
    }

    /// Whether `fit` must be called before `transform`.
    ///
    /// Hosts may skip the fit step entirely for transformers that return
    /// `false`.
    fn requires_fit(&self) -> bool {
        true
    }

    /// Transform each element of the payload, preserving its shape.
    fn transform(&self, x: &[Vec<f64>]) -> Vec<Vec<f64>>;

    /// Exact inverse of [`transform`](SeriesTransformer::transform).
    fn inverse_transform(&self, x: &[Vec<f64>]) -> Vec<Vec<f64>>;

    /// Get the transformer name.
    fn name(&self) -> &str;
}
