//! Newton Forward-Difference Interpolation
//!
//! Implements [Newton's forward-difference formula](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_forward_divided_difference_formula)
//! for equally spaced data. With `h = x_1 - x_0` and `u = (q - x_0) / h`:
//!
//! ```text
//! P(q) = y_0 + sum_{i=1..D} u (u - 1) ... (u - i + 1) / i! * Δ^i y_0
//! ```
//!
//! The nodes must be equally spaced. Uneven nodes yield a wrong polynomial,
//! not an error, unless [`ForwardCfg::set_require_uniform`] is enabled. Use
//! [`crate::interpolation::newton`] for uneven data.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::table::DifferenceTable;
use crate::interpolation::traits::Interpolator;

/// Relative tolerance on each node gap against `h`.
pub const DEFAULT_SPACING_RTOL: f64 = 1e-9;


/// Forward-difference configuration
///
/// # Fields
/// - `common`          : [`CommonCfg`]
/// - `require_uniform` : reject uneven node spacing instead of warning
/// - `spacing_rtol`    : relative tolerance used by the spacing check
///
/// # Defaults
/// - `require_uniform = false`, `spacing_rtol = `[`DEFAULT_SPACING_RTOL`]
#[derive(Debug, Clone, Copy)]
pub struct ForwardCfg<'a> {
    common: CommonCfg<'a>,
    require_uniform: bool,
    spacing_rtol: f64,
}
impl<'a> ForwardCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            require_uniform: false,
            spacing_rtol: DEFAULT_SPACING_RTOL,
        }
    }

    pub fn set_require_uniform(mut self, v: bool) -> Self {
        self.require_uniform = v;
        self
    }

    pub fn set_spacing_rtol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v < 0.0 {
            return Err(InterpolationError::InvalidSpacingTol { got: v });
        }
        self.spacing_rtol = v;
        Ok(self)
    }

    pub fn require_uniform(&self) -> bool { self.require_uniform }
    pub fn spacing_rtol(&self) -> f64 { self.spacing_rtol }
}
impl Default for ForwardCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(ForwardCfg<'a>);


/// Checks that the nodes `x_0..=x_D` share the step `h = x_1 - x_0`.
///
/// Returns `h`, or `None` when there is a single node.
pub fn uniform_step(samples: &SampleSet, rtol: f64) -> Result<Option<f64>, InterpolationError> {
    let (x, _) = samples.nodes();
    if x.len() < 2 {
        return Ok(None);
    }

    let h = x[1] - x[0];
    for i in 2..x.len() {
        let gap = x[i] - x[i - 1];
        if (gap - h).abs() > rtol * h.abs() {
            return Err(InterpolationError::NonUniformSpacing { idx: i, expected: h, got: gap });
        }
    }
    Ok(Some(h))
}


/// Newton forward-difference evaluator.
#[derive(Debug, Clone)]
pub struct NewtonForward<'a> {
    samples: SampleSet<'a>,
    table: DifferenceTable,
}

impl<'a> NewtonForward<'a> {
    /// Builds the evaluator; uneven spacing is logged and tolerated.
    pub fn new(samples: SampleSet<'a>) -> Self {
        Self::with_rtol(samples, DEFAULT_SPACING_RTOL)
    }

    /// As [`NewtonForward::new`], warning on gaps that differ from `h` by
    /// more than `rtol * |h|`.
    pub fn with_rtol(samples: SampleSet<'a>, rtol: f64) -> Self {
        if let Err(err) = uniform_step(&samples, rtol) {
            log::warn!("newton forward: {err}, results will be inaccurate");
        }
        Self::build(samples)
    }

    /// Builds the evaluator, rejecting uneven spacing.
    pub fn strict(samples: SampleSet<'a>, rtol: f64) -> Result<Self, InterpolationError> {
        uniform_step(&samples, rtol)?;
        Ok(Self::build(samples))
    }

    fn build(samples: SampleSet<'a>) -> Self {
        let table = DifferenceTable::forward(&samples);
        Self { samples, table }
    }

    pub fn table(&self) -> &DifferenceTable { &self.table }
}

impl Interpolator for NewtonForward<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        if !xq.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { got: xq });
        }

        let x     = self.samples.x();
        let delta = self.table.top_row();
        let d     = self.samples.degree();

        // constant polynomial, h is undefined
        if d == 0 {
            return Ok(delta[0]);
        }

        let h = x[1] - x[0];
        let u = (xq - x[0]) / h;

        // term_i = u (u-1) ... (u-i+1) / i!
        let mut p    = delta[0];
        let mut term = 1.0;
        for i in 1..=d {
            term *= (u - (i - 1) as f64) / i as f64;
            p += term * delta[i];
        }
        Ok(p)
    }

    fn domain(&self) -> (f64, f64) { self.samples.span() }
}


/// Performs Newton forward-difference interpolation.
///
/// # Behavior
/// - Builds the forward-difference table over the first `D + 1` points.
/// - Evaluates the forward series at each point of `cfg.common.x_eval()`.
///   Accuracy drops as `|xq - x_0|` grows past the sampled span.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name = "newton_forward"`.
///
/// # Errors
/// - Any [`InterpolationError`] raised by validating the dataset.
/// - [`InterpolationError::NonUniformSpacing`] if `require_uniform` is set
///   and the nodes are unevenly spaced.
pub fn interpolate(cfg: ForwardCfg) -> Result<InterpolationReport, InterpolationError> {
    let samples = cfg.common.samples()?;
    let evals   = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::NewtonForward,
        samples.len(),
        evals.len(),
        samples.degree(),
    );

    let forward = if cfg.require_uniform {
        NewtonForward::strict(samples, cfg.spacing_rtol)?
    } else {
        NewtonForward::with_rtol(samples, cfg.spacing_rtol)
    };
    report.evaluated = forward.eval_many(evals)?;

    Ok(report)
}
