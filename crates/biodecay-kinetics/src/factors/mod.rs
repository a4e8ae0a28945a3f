//! Factor library: one covariate in, one non-negative multiplier out.
//!
//! Every function here is pure and total. Out-of-range inputs are clamped,
//! never rejected, and no factor can return a negative value.

pub mod gaussian;
pub mod humidity;
pub mod light;
pub mod microbial;
pub mod oxygen;
pub mod ph;
pub mod pressure;
pub mod temperature;

pub use gaussian::gaussian_factor;
