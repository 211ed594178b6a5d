//! Interpolation error at the sample points.
//!
//! Every sample `(x_i, y_i)` of the full dataset is compared against the
//! Lagrange polynomial. Nodes `i <= D` sit on the polynomial and report
//! rounding-level errors; samples past `x_D` were never fitted and may
//! report large ones.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::traits::Interpolator;


/// Error at one sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeError {
    pub x: f64,
    pub y: f64,
    pub interpolated: f64,
    pub error: f64,
}


/// Per-sample errors of the Lagrange fit.
///
/// [`ErrorReport`]
/// - `algorithm_name` : always `"lagrange"`
/// - `degree`         : degree of the fitted polynomial
/// - `points`         : one [`NodeError`] per sample, in dataset order
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub algorithm_name: &'static str,
    pub degree: usize,
    pub points: Vec<NodeError>,
}

impl ErrorReport {
    /// Largest absolute error over all samples.
    pub fn max_error(&self) -> f64 {
        self.points.iter().map(|p| p.error).fold(0.0, f64::max)
    }

    /// Whether sample `i` was an interpolation node.
    pub fn is_node(&self, i: usize) -> bool {
        i <= self.degree
    }

    /// `(x_i, error_i)` pairs for display.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.x, p.error))
    }
}


/// Computes `|P(x_i) - y_i|` for every sample using the Lagrange fit.
pub fn estimate_errors(samples: &SampleSet) -> Result<ErrorReport, InterpolationError> {
    let lagrange = Lagrange::new(*samples);

    let mut points = Vec::with_capacity(samples.len());
    for (&x, &y) in samples.x().iter().zip(samples.y()) {
        let interpolated = lagrange.eval(x)?;
        points.push(NodeError { x, y, interpolated, error: (interpolated - y).abs() });
    }

    let report = ErrorReport {
        algorithm_name: "lagrange",
        degree: samples.degree(),
        points,
    };
    log::debug!("error estimation: n={}, max_error={:e}", report.points.len(), report.max_error());
    Ok(report)
}
