//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between adjacent
//! `x` data; [`DEFAULT_X_TOL`], and the polynomial degree cap;
//! [`DEFAULT_MAX_DEGREE`]. Shared by all interpolation algorithms.
//!
//! [`CommonCfg`] — universal fields
//! - `x`          : x values provided
//! - `y`          : y values provided
//! - `x_eval`     : x values to evaluate
//! - `x_tol`      : minimum spacing between consecutive x values
//! - `max_degree` : upper bound on the interpolating polynomial degree
//!
//! [`CommonCfg::new`] initializes configuration with empty `Vec<f64>`s.


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::samples::SampleSet;

pub const DEFAULT_X_TOL: f64 = 1e-12;

/// Degree cap, keeps high-order oscillation (Runge) out of the fit.
pub const DEFAULT_MAX_DEGREE: usize = 6;

/// Step used for dense sampling over `[x_0, x_{n-1}]`.
pub const DEFAULT_SAMPLE_STEP: f64 = 0.1;

/// Upper bound on the number of points a dense sampling may produce.
pub const MAX_DENSE_SAMPLES: usize = 10_000_000;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) max_degree   : usize,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            max_degree   : DEFAULT_MAX_DEGREE,
        }
    }
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        // x_tol may have been tightened after set_x
        check_x(x, self.x_min_spacing)?;
        Ok(())
    }

    /// Validates and freezes the dataset into a [`SampleSet`].
    pub fn samples(&self) -> Result<SampleSet<'a>, InterpolationError> {
        self.validate()?;
        Ok(SampleSet::from_validated(self.x, self.y, self.max_degree))
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }
    pub fn max_degree(&self) -> usize { self.max_degree }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_max_degree(&mut self, v: usize) { self.max_degree = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Rejects empty, non-finite, non-increasing or too-close x data.
pub(crate) fn check_x(v: &[f64], x_min_spacing: f64) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(v) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    for i in 1..v.len() {
        if (v[i] - v[i - 1]).abs() < x_min_spacing {
            return Err(InterpolationError::DuplicateX {
                x1: v[i - 1],
                x2: v[i],
            });
        }
        if v[i] <= v[i - 1] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                $crate::interpolation::config::check_x(v, self.common.x_min_spacing)?;

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            /// Caps the polynomial degree; the effective degree is
            /// `min(n - 1, max_degree)`. A cap of 0 fits a constant.
            pub fn set_max_degree(mut self, v: usize) -> Self {
                self.common.with_max_degree(v);
                self
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
