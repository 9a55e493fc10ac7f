//! Scaled logit transform for data with known limits.
//!
//! Maps values from a bounded interval onto the whole real line so models
//! that know nothing about the limits can be applied, then maps results
//! back inside the limits with the exact inverse. With only one bound set
//! the transform degenerates to a log transform anchored at that bound;
//! with no bounds it is the identity.

use crate::core::TimeSeries;
use crate::error::Result;
use crate::transform::SeriesTransformer;

/// Apply the scaled logit transform elementwise.
///
/// The formula is selected by which bounds are present
/// (`a` = lower, `b` = upper):
///
/// * both: `ln((x - a) / (b - x))`
/// * upper only: `-ln(b - x)`
/// * lower only: `ln(x - a)`
/// * neither: identity (returns a copy)
///
/// Values outside the open interval implied by the bounds are not rejected;
/// the formula is evaluated anyway and yields `NaN` or infinities under
/// IEEE-754 semantics.
pub fn scaled_logit(series: &[f64], lower: Option<f64>, upper: Option<f64>) -> Vec<f64> {
    match (lower, upper) {
        (Some(a), Some(b)) => series.iter().map(|&x| ((x - a) / (b - x)).ln()).collect(),
        (None, Some(b)) => series.iter().map(|&x| -(b - x).ln()).collect(),
        (Some(a), None) => series.iter().map(|&x| (x - a).ln()).collect(),
        (None, None) => series.to_vec(),
    }
}

/// Apply the inverse scaled logit transform elementwise.
///
/// Exact algebraic inverse of [`scaled_logit`] for the same bounds:
///
/// * both: `(b·eˣ + a) / (eˣ + 1)`
/// * upper only: `b - e⁻ˣ`
/// * lower only: `eˣ + a`
/// * neither: identity (returns a copy)
pub fn inv_scaled_logit(series: &[f64], lower: Option<f64>, upper: Option<f64>) -> Vec<f64> {
    match (lower, upper) {
        (Some(a), Some(b)) => series
            .iter()
            .map(|&x| (b * x.exp() + a) / (x.exp() + 1.0))
            .collect(),
        (None, Some(b)) => series.iter().map(|&x| b - (-x).exp()).collect(),
        (Some(a), None) => series.iter().map(|&x| x.exp() + a).collect(),
        (None, None) => series.to_vec(),
    }
}

/// Elementwise scaled logit transform with optional lower and upper bounds.
///
/// The transform is stateless: both bounds are fixed at construction and
/// `fit` is a no-op. Bound presence is explicit, so a bound of `0.0` is a
/// real bound and selects the same formula branch as any other value.
///
/// Inputs at or beyond a configured bound are reported with a non-fatal
/// warning per violated bound; the output is still computed and may contain
/// `NaN` or infinities. No ordering between the two bounds is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaledLogit {
    lower_bound: Option<f64>,
    upper_bound: Option<f64>,
}

impl ScaledLogit {
    /// Create a transform with the given optional bounds.
    pub fn new(lower_bound: Option<f64>, upper_bound: Option<f64>) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// Create a transform bounded on both sides.
    pub fn bounded(lower: f64, upper: f64) -> Self {
        Self::new(Some(lower), Some(upper))
    }

    /// Create a transform bounded from below only.
    pub fn lower_bounded(lower: f64) -> Self {
        Self::new(Some(lower), None)
    }

    /// Create a transform bounded from above only.
    pub fn upper_bounded(upper: f64) -> Self {
        Self::new(None, Some(upper))
    }

    /// Create the identity transform (no bounds).
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Fixed valid configuration used by the automated conformance tests.
    pub fn conformance_instance() -> Self {
        Self::bounded(-1_000_000.0, 1_000_000.0)
    }

    /// Get the lower bound, if set.
    pub fn lower_bound(&self) -> Option<f64> {
        self.lower_bound
    }

    /// Get the upper bound, if set.
    pub fn upper_bound(&self) -> Option<f64> {
        self.upper_bound
    }

    /// Transform every channel of a time series, preserving timestamps.
    pub fn transform_series(&self, series: &TimeSeries) -> Result<TimeSeries> {
        series.with_values(self.transform(series.channels()))
    }

    /// Inverse-transform every channel of a time series, preserving
    /// timestamps.
    pub fn inverse_transform_series(&self, series: &TimeSeries) -> Result<TimeSeries> {
        series.with_values(self.inverse_transform(series.channels()))
    }

    /// Warn once per bound violated anywhere in the payload.
    fn check_domain(&self, x: &[Vec<f64>]) {
        if let Some(b) = self.upper_bound {
            if x.iter().flatten().any(|&v| v >= b) {
                log::warn!(
                    "ScaledLogit: input contains values >= upper bound {}; output will not be finite everywhere",
                    b
                );
            }
        }
        if let Some(a) = self.lower_bound {
            if x.iter().flatten().any(|&v| v <= a) {
                log::warn!(
                    "ScaledLogit: input contains values <= lower bound {}; output will not be finite everywhere",
                    a
                );
            }
        }
    }
}

impl SeriesTransformer for ScaledLogit {
    fn requires_fit(&self) -> bool {
        false
    }

    fn transform(&self, x: &[Vec<f64>]) -> Vec<Vec<f64>> {
        self.check_domain(x);
        x.iter()
            .map(|channel| scaled_logit(channel, self.lower_bound, self.upper_bound))
            .collect()
    }

    fn inverse_transform(&self, x: &[Vec<f64>]) -> Vec<Vec<f64>> {
        x.iter()
            .map(|channel| inv_scaled_logit(channel, self.lower_bound, self.upper_bound))
            .collect()
    }

    fn name(&self) -> &str {
        "ScaledLogit"
    }
}
