//! One dataset, three interpolating evaluators.
//!
//! [`PolynomialInterpolator`] owns a validated [`SampleSet`] and the
//! Lagrange, Newton divided-difference and Newton forward-difference
//! evaluators built over it. All evaluations are read-only.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::estimate::{estimate_errors, ErrorReport};
use crate::interpolation::forward::NewtonForward;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::newton::NewtonDividedDifference;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::Interpolator;


/// Configuration for [`PolynomialInterpolator`]; `x_eval` is unused.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> PolynomialCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for PolynomialCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(PolynomialCfg<'a>);


/// Values of all three methods at one query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub x: f64,
    pub lagrange: f64,
    pub newton_divided: f64,
    pub newton_forward: f64,
}

impl Comparison {
    pub fn get(&self, algorithm: Algorithm) -> f64 {
        match algorithm {
            Algorithm::Lagrange                => self.lagrange,
            Algorithm::NewtonDividedDifference => self.newton_divided,
            Algorithm::NewtonForward           => self.newton_forward,
        }
    }
}


#[derive(Debug, Clone)]
pub struct PolynomialInterpolator<'a> {
    samples: SampleSet<'a>,
    lagrange: Lagrange<'a>,
    newton_divided: NewtonDividedDifference<'a>,
    newton_forward: NewtonForward<'a>,
}

impl<'a> PolynomialInterpolator<'a> {
    pub fn new(samples: SampleSet<'a>) -> Self {
        Self {
            samples,
            lagrange: Lagrange::new(samples),
            newton_divided: NewtonDividedDifference::new(samples),
            newton_forward: NewtonForward::new(samples),
        }
    }

    pub fn from_cfg(cfg: PolynomialCfg<'a>) -> Result<Self, InterpolationError> {
        Ok(Self::new(cfg.common.samples()?))
    }

    pub fn samples(&self) -> &SampleSet<'a> { &self.samples }
    pub fn degree(&self) -> usize { self.samples.degree() }

    pub fn method(&self, algorithm: Algorithm) -> &dyn Interpolator {
        match algorithm {
            Algorithm::Lagrange                => &self.lagrange,
            Algorithm::NewtonDividedDifference => &self.newton_divided,
            Algorithm::NewtonForward           => &self.newton_forward,
        }
    }

    pub fn eval(&self, algorithm: Algorithm, xq: f64) -> Result<f64, InterpolationError> {
        self.method(algorithm).eval(xq)
    }

    pub fn lagrange(&self, xq: f64) -> Result<f64, InterpolationError> {
        self.lagrange.eval(xq)
    }

    pub fn newton_divided(&self, xq: f64) -> Result<f64, InterpolationError> {
        self.newton_divided.eval(xq)
    }

    pub fn newton_forward(&self, xq: f64) -> Result<f64, InterpolationError> {
        self.newton_forward.eval(xq)
    }

    pub fn compare(&self, xq: f64) -> Result<Comparison, InterpolationError> {
        Ok(Comparison {
            x: xq,
            lagrange: self.lagrange(xq)?,
            newton_divided: self.newton_divided(xq)?,
            newton_forward: self.newton_forward(xq)?,
        })
    }

    pub fn estimate_errors(&self) -> Result<ErrorReport, InterpolationError> {
        estimate_errors(&self.samples)
    }

    /// Dense `(x, P(x))` samples over `[x_0, x_{n-1}]` for `algorithm`.
    pub fn sample_dense(
        &self,
        algorithm: Algorithm,
        step: f64,
    ) -> Result<Vec<(f64, f64)>, InterpolationError> {
        self.method(algorithm).sample_dense(step)
    }
}
