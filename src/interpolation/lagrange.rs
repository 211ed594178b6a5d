//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in the
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(q) = sum_{i=0..D} y_i * prod_{j != i} (q - x_j) / (x_i - x_j)
//! ```
//!
//! Only the first `D + 1` samples enter the sum, `D = min(n - 1, max_degree)`.
//! Points past `x_D` are not fitted.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::Interpolator;


/// Lagrange interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`LagrangeCfg::new`] then optional setters. 
#[derive(Debug, Clone, Copy)] 
pub struct LagrangeCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for LagrangeCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LagrangeCfg<'a>);


#[inline]
fn lagrange_at(x: &[f64], y: &[f64], xq: f64) -> f64 {
    let mut p = 0.0;
    for i in 0..x.len() {
        let mut term = y[i];
        for j in 0..x.len() {
            if j != i {
                term *= (xq - x[j]) / (x[i] - x[j]);
            }
        }
        p += term;
    }
    p
}


/// Lagrange evaluator over the nodes of a [`SampleSet`].
#[derive(Debug, Clone, Copy)]
pub struct Lagrange<'a> {
    samples: SampleSet<'a>,
}

impl<'a> Lagrange<'a> {
    pub fn new(samples: SampleSet<'a>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &SampleSet<'a> { &self.samples }
}

impl Interpolator for Lagrange<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        if !xq.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: xq });
        }
        let (x, y) = self.samples.nodes();
        Ok(lagrange_at(x, y, xq))
    }

    fn domain(&self) -> (f64, f64) { self.samples.span() }
}


/// Performs Lagrange interpolation.
///
/// # Behavior
/// - For each evaluation point `xq` in `cfg.common.x_eval()`, sums the
///   `D + 1` weighted basis polynomials in `O(D^2)`.
/// - Points outside `[x[0], x[n-1]]` are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `degree`         : `min(n - 1, max_degree)`
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - Any [`InterpolationError`] raised by validating the dataset.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    let samples = cfg.common.samples()?;
    let evals   = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        samples.len(),
        evals.len(),
        samples.degree(),
    );

    let lagrange = Lagrange::new(samples);
    report.evaluated = lagrange.eval_many(evals)?;

    Ok(report)
}
