pub mod degradation_model;
pub mod environment_source;

pub use degradation_model::IDegradationModel;
pub use environment_source::{FixedEnvironment, IEnvironmentSource};
