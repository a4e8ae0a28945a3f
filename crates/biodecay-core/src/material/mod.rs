pub mod profile;
pub mod unit;

pub use profile::{MaterialProfile, MaterialProfileBuilder};
pub use unit::QuantityUnit;
