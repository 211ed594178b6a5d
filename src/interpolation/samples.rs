//! Validated, immutable view over an `(x, y)` dataset.
//!
//! A [`SampleSet`] carries its own degree, `D = min(n - 1, max_degree)`,
//! so independent datasets never share a cap.

use crate::interpolation::config::{CommonCfg, DEFAULT_MAX_DEGREE};
use crate::interpolation::errors::InterpolationError;


/// Sample pairs with strictly increasing `x`.
///
/// # Fields
/// - `x`, `y`  : full dataset, `n >= 1` points
/// - `degree`  : polynomial degree used by every evaluator
#[derive(Debug, Copy, Clone)]
pub struct SampleSet<'a> {
    x: &'a [f64],
    y: &'a [f64],
    degree: usize,
}

impl<'a> SampleSet<'a> {
    /// Validates `x`/`y` with the default degree cap.
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, InterpolationError> {
        Self::with_max_degree(x, y, DEFAULT_MAX_DEGREE)
    }

    pub fn with_max_degree(
        x: &'a [f64],
        y: &'a [f64],
        max_degree: usize,
    ) -> Result<Self, InterpolationError> {
        let mut common = CommonCfg::new();
        common.with_x(x);
        common.with_y(y);
        common.with_max_degree(max_degree);
        common.samples()
    }

    pub(crate) fn from_validated(x: &'a [f64], y: &'a [f64], max_degree: usize) -> Self {
        let degree = (x.len() - 1).min(max_degree);
        log::debug!("sample set: n={}, degree={}", x.len(), degree);
        Self { x, y, degree }
    }

    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn degree(&self) -> usize { self.degree }

    /// Always false, a validated set holds at least one point.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// The `D + 1` leading points the polynomial passes through.
    pub fn nodes(&self) -> (&'a [f64], &'a [f64]) {
        let m = self.degree + 1;
        (&self.x[..m], &self.y[..m])
    }

    /// `(x_0, x_{n-1})`
    pub fn span(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}
