pub mod reading;
pub mod scenario;

pub use reading::EnvironmentReading;
pub use scenario::{Scenario, TimeUnit};
