//! Host-side dataset loading and plain-text export.
//!
//! Nothing here is needed to interpolate; it reads the whitespace-separated
//! input format and writes `x y` point files for external plotting.

pub mod dataset;
pub mod errors;
pub mod export;

pub use dataset::Dataset;
pub use errors::DatasetError;
