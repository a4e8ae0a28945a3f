use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BiodecayError;

/// Time base of a scenario's rate constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Days,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Days => "days",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named degradation setting.
///
/// Compost and soil scenarios run on a per-day clock; immersion scenarios
/// (films dissolving in liquid) run per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    IndustrialCompost,
    HomeCompost,
    SoilBurial,
    WaterImmersion,
    SalivaImmersion,
    GastricImmersion,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::IndustrialCompost,
        Scenario::HomeCompost,
        Scenario::SoilBurial,
        Scenario::WaterImmersion,
        Scenario::SalivaImmersion,
        Scenario::GastricImmersion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::IndustrialCompost => "industrial_compost",
            Scenario::HomeCompost => "home_compost",
            Scenario::SoilBurial => "soil_burial",
            Scenario::WaterImmersion => "water_immersion",
            Scenario::SalivaImmersion => "saliva_immersion",
            Scenario::GastricImmersion => "gastric_immersion",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::IndustrialCompost => "Industrial compost",
            Scenario::HomeCompost => "Home compost",
            Scenario::SoilBurial => "Soil burial",
            Scenario::WaterImmersion => "Water",
            Scenario::SalivaImmersion => "Saliva",
            Scenario::GastricImmersion => "Gastric",
        }
    }

    pub fn time_unit(self) -> TimeUnit {
        match self {
            Scenario::IndustrialCompost | Scenario::HomeCompost | Scenario::SoilBurial => {
                TimeUnit::Days
            }
            Scenario::WaterImmersion | Scenario::SalivaImmersion | Scenario::GastricImmersion => {
                TimeUnit::Seconds
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = BiodecayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == normalized)
            .ok_or_else(|| BiodecayError::UnknownScenario { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.as_str().parse::<Scenario>().unwrap(), scenario);
        }
    }

    #[test]
    fn parsing_tolerates_case_and_separators() {
        assert_eq!("Home Compost".parse::<Scenario>().unwrap(), Scenario::HomeCompost);
        assert_eq!("soil-burial".parse::<Scenario>().unwrap(), Scenario::SoilBurial);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "landfill".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, BiodecayError::UnknownScenario { ref name } if name == "landfill"));
    }

    #[test]
    fn immersion_runs_in_seconds() {
        assert_eq!(Scenario::SalivaImmersion.time_unit(), TimeUnit::Seconds);
        assert_eq!(Scenario::SoilBurial.time_unit(), TimeUnit::Days);
    }
}
