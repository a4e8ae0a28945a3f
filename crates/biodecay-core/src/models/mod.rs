pub mod degradation_summary;
pub mod degradation_time;
pub mod factor_breakdown;
pub mod scenario_estimate;

pub use degradation_summary::DegradationSummary;
pub use degradation_time::DegradationTime;
pub use factor_breakdown::FactorBreakdown;
pub use scenario_estimate::ScenarioEstimate;
