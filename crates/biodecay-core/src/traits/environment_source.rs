use crate::environment::EnvironmentReading;

/// Supplier of ambient conditions (a sensor poller, a fixture, literal defaults).
pub trait IEnvironmentSource: Send + Sync {
    fn current_reading(&self) -> EnvironmentReading;
}

/// Source that always reports the same reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedEnvironment(pub EnvironmentReading);

impl IEnvironmentSource for FixedEnvironment {
    fn current_reading(&self) -> EnvironmentReading {
        self.0
    }
}
