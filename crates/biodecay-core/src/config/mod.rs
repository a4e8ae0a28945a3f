pub mod biodecay_config;
pub mod defaults;
pub mod factor_config;
pub mod material_spec;
pub mod observability_config;
pub mod report_config;

pub use biodecay_config::BiodecayConfig;
pub use factor_config::{
    FactorConfig, GaussianFactorSet, LightFactorSet, MicrobialFactorSet, PressureFactorSet,
    TemperatureFactorSet,
};
pub use material_spec::MaterialSpec;
pub use observability_config::ObservabilityConfig;
pub use report_config::ReportConfig;
