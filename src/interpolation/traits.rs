use crate::interpolation::config::MAX_DENSE_SAMPLES;
use crate::interpolation::errors::InterpolationError;

pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// `(x_0, x_{n-1})` of the underlying dataset
    fn domain(&self) -> (f64, f64);

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// `(x, P(x))` pairs over the domain at a fixed `step`, both ends included.
    ///
    /// Yields `ceil((x_{n-1} - x_0) / step) + 1` points; the last one is
    /// clamped to `x_{n-1}`.
    fn sample_dense(&self, step: f64) -> Result<Vec<(f64, f64)>, InterpolationError> {
        let xs = dense_grid(self.domain(), step)?;
        xs.into_iter()
            .map(|xq| self.eval(xq).map(|yq| (xq, yq)))
            .collect()
    }
}


/// Grid `x_0, x_0 + step, ..., x_{n-1}`.
///
/// Span/step ratios within `1e-9` of an integer count as exact, so a span of
/// `4.0` at step `0.1` gives 41 points rather than 42. Grids longer than
/// [`MAX_DENSE_SAMPLES`] are rejected.
pub fn dense_grid(domain: (f64, f64), step: f64) -> Result<Vec<f64>, InterpolationError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(InterpolationError::InvalidStep { got: step });
    }

    let (x_min, x_max) = domain;
    let ratio = (x_max - x_min) / step;
    let steps = if (ratio - ratio.round()).abs() < 1e-9 {
        ratio.round()
    } else {
        ratio.ceil()
    };
    if !steps.is_finite() || steps + 1.0 > MAX_DENSE_SAMPLES as f64 {
        return Err(InterpolationError::TooManySamples {
            step,
            got: steps + 1.0,
            max: MAX_DENSE_SAMPLES,
        });
    }
    let steps = steps as usize;

    let mut xs = Vec::with_capacity(steps + 1);
    for k in 0..steps {
        xs.push(x_min + k as f64 * step);
    }
    xs.push(x_max);

    Ok(xs)
}
