// Single source of truth for all default values.
//
// The viable-range floor, UV suppression, and pressure floor are calibration
// parameters carried over from the kinetics model without a cited empirical
// source. Keep the numbers stable until a revision can justify new ones.

// --- Temperature (Q10) ---
pub const DEFAULT_REFERENCE_TEMP_C: f64 = 25.0;
pub const DEFAULT_Q10: f64 = 2.0;
pub const DEFAULT_VIABLE_MIN_C: f64 = 5.0;
pub const DEFAULT_VIABLE_MAX_C: f64 = 45.0;
pub const DEFAULT_TEMPERATURE_FLOOR: f64 = 0.1;

// --- Relative humidity (%) ---
pub const DEFAULT_HUMIDITY_PEAK: f64 = 90.0;
pub const DEFAULT_HUMIDITY_WIDTH: f64 = 20.0;
pub const DEFAULT_HUMIDITY_MAX_BOOST: f64 = 1.5;
pub const HUMIDITY_CLAMP: (f64, f64) = (0.0, 100.0);

// --- pH ---
pub const DEFAULT_PH_PEAK: f64 = 7.0;
pub const DEFAULT_PH_WIDTH: f64 = 1.5;
pub const DEFAULT_PH_MAX_BOOST: f64 = 1.3;
pub const PH_CLAMP: (f64, f64) = (0.0, 14.0);

// --- Oxygen (volume fraction) ---
pub const DEFAULT_OXYGEN_PEAK: f64 = 0.21;
pub const DEFAULT_OXYGEN_WIDTH: f64 = 0.08;
pub const DEFAULT_OXYGEN_MAX_BOOST: f64 = 1.2;
pub const OXYGEN_CLAMP: (f64, f64) = (0.0, 1.0);

// --- Illuminance (lux) ---
pub const DEFAULT_LIGHT_PEAK_LUX: f64 = 500.0;
pub const DEFAULT_LIGHT_WIDTH_LUX: f64 = 2_000.0;
pub const DEFAULT_LIGHT_MAX_BOOST: f64 = 1.1;
pub const LIGHT_CLAMP: (f64, f64) = (0.0, 150_000.0);
pub const DEFAULT_UV_THRESHOLD_LUX: f64 = 50_000.0;
pub const DEFAULT_UV_SUPPRESSION: f64 = 0.3;

// --- Pressure (kPa) ---
pub const DEFAULT_PRESSURE_PEAK_KPA: f64 = 101.325;
pub const DEFAULT_PRESSURE_WIDTH_KPA: f64 = 25.0;
pub const PRESSURE_CLAMP_KPA: (f64, f64) = (50.0, 150.0);
pub const DEFAULT_PRESSURE_FLOOR: f64 = 0.5;

// --- Microbial synergy ---
pub const DEFAULT_MICROBIAL_ENABLED: bool = true;
pub const DEFAULT_MICROBIAL_TEMP_PEAK_C: f64 = 30.0;
pub const DEFAULT_MICROBIAL_TEMP_WIDTH_C: f64 = 10.0;
pub const DEFAULT_MICROBIAL_HUMIDITY_PEAK: f64 = 85.0;
pub const DEFAULT_MICROBIAL_HUMIDITY_WIDTH: f64 = 15.0;
pub const DEFAULT_MICROBIAL_MAX_BOOST: f64 = 1.4;

// --- Report ---
pub const DEFAULT_REPORT_DECIMALS: usize = 1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
