use thiserror::Error;

use crate::interpolation::errors::InterpolationError;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing {what}")]
    MissingToken { what: &'static str },

    #[error("invalid number {token:?} for {what}")]
    InvalidNumber { token: String, what: &'static str },

    #[error("invalid sample count {got}: need at least 1")]
    InvalidCount { got: usize },

    #[error("unexpected trailing token {token:?}")]
    TrailingToken { token: String },

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
