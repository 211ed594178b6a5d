//! Defines the interpolation algorithm variants 
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods. 

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]                Lagrange basis polynomials 
/// - [`Algorithm::NewtonDividedDifference`] Newton form, divided differences 
/// - [`Algorithm::NewtonForward`]           Newton form, forward differences (uniform x) 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Lagrange,
    NewtonDividedDifference, 
    NewtonForward,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Lagrange,
        Algorithm::NewtonDividedDifference,
        Algorithm::NewtonForward,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange                => "lagrange",
            Algorithm::NewtonDividedDifference => "newton_divided_difference",
            Algorithm::NewtonForward           => "newton_forward",
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
