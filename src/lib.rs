pub mod interpolation;
pub mod io;
