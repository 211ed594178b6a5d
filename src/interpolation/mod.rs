pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub mod samples;
pub mod table;
pub mod traits;
pub use traits::Interpolator;
pub use samples::SampleSet;

pub mod lagrange; 
pub mod newton; 
pub mod forward;
pub mod estimate;
pub mod polynomial;
pub use polynomial::PolynomialInterpolator;
