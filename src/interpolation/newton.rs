//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are the leading row of the divided-difference table and are
//! evaluated at query points using Horner’s scheme for numerical stability.
//! Produces the same polynomial as [`crate::interpolation::lagrange`] on the
//! same `D + 1` nodes.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::table::DifferenceTable;
use crate::interpolation::traits::Interpolator;


/// Newton interpolation configuration 
/// 
/// # Fields 
/// - `common` : [`CommonCfg`] 
///
/// # Construction 
/// - Use [`NewtonCfg::new`] then optional setters. 
///
/// # Defaults 
/// - Minimum allowed `x` spacing between consecutive data points;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default. 
/// - Degree cap; [`crate::interpolation::config::DEFAULT_MAX_DEGREE`].
#[derive(Debug, Clone, Copy)] 
pub struct NewtonCfg<'a> { 
    common: CommonCfg<'a>, 
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Newton divided-difference evaluator.
///
/// The table depends only on the dataset, so it is built once here
/// instead of on every query.
#[derive(Debug, Clone)]
pub struct NewtonDividedDifference<'a> {
    samples: SampleSet<'a>,
    table: DifferenceTable,
}

impl<'a> NewtonDividedDifference<'a> {
    pub fn new(samples: SampleSet<'a>) -> Self {
        let table = DifferenceTable::divided(&samples);
        Self { samples, table }
    }

    pub fn table(&self) -> &DifferenceTable { &self.table }

    /// `c[j] = d[0][j]`, so that
    /// `P(x) = c[0] + c[1](x - x0) + ... + c[D](x - x0)...(x - x_{D-1})`.
    pub fn coefficients(&self) -> &[f64] { self.table.top_row() }
}

impl Interpolator for NewtonDividedDifference<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        if !xq.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: xq });
        }

        let x      = self.samples.x();
        let coeffs = self.coefficients();
        let d      = self.samples.degree();

        let mut p = coeffs[d];
        for j in (0..d).rev() {
            p = coeffs[j] + (xq - x[j]) * p;
        }
        Ok(p)
    }

    fn domain(&self) -> (f64, f64) { self.samples.span() }
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table over the first `D + 1` points
///   to obtain coefficients `c[i]`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial using Horner’s nested form:
///
/// ```text
/// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[D] ... ] ]
/// ```
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton_divided_difference"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `degree`         : `min(n - 1, max_degree)`
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - Any [`InterpolationError`] raised by validating the dataset.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> { 
    let samples = cfg.common.samples()?; 
    let evals   = cfg.common.x_eval(); 

    let mut report = InterpolationReport::new( 
        Algorithm::NewtonDividedDifference, 
        samples.len(), 
        evals.len(), 
        samples.degree(),
    ); 

    let newton = NewtonDividedDifference::new(samples);
    report.evaluated = newton.eval_many(evals)?;

    Ok(report)
}
