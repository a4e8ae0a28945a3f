//! Error handling for biodecay.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod biodecay_error;
pub mod config_error;
pub mod profile_error;

pub use biodecay_error::{BiodecayError, BiodecayResult};
pub use config_error::ConfigError;
pub use profile_error::ProfileError;
