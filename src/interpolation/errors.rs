use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("non-finite query point {got}")]
    NonFiniteQuery { got: f64 },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("non-uniform spacing at node {idx}: expected step {expected}, got {got}")]
    NonUniformSpacing { idx: usize, expected: f64, got: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid spacing rtol {got} must be finite and >= 0")]
    InvalidSpacingTol { got: f64 },

    #[error("invalid sample step {got} must be finite and > 0")]
    InvalidStep { got: f64 },

    #[error("step {step} yields {got} samples, limit is {max}")]
    TooManySamples { step: f64, got: f64, max: usize },
}
