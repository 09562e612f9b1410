use serde::{Deserialize, Serialize};

use crate::catalog::BodyProfile;
use crate::factors::FactorSet;
use crate::population::MissionParameters;

/// Contents of `config.yaml`. Every section is optional.
///
/// Example YAML:
/// ```yaml
/// mission:
///   males: 50
///   females: 50
///   frozen_embryos: 200
///   duration_years: 30
/// survival:
///   year: 2050
/// bodies:
///   - name: Kepler-442b
///     distance_au: 75900000
///     travel_time_years: 20000
///     star_distance_au: 0.409
///     habitable_zone: true
///     factors: { climate_stability: 50, ... }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// User-defined bodies that can be made the custom body by name
    #[serde(default)]
    pub bodies: Vec<BodyProfile>,

    /// Mission used when the session has none
    #[serde(default)]
    pub mission: Option<MissionParameters>,

    #[serde(default)]
    pub survival: Option<SurvivalConfig>,
}

impl Config {
    /// Find a user-defined body by name, ignoring case.
    pub fn body(&self, name: &str) -> Option<&BodyProfile> {
        let name = name.trim();
        self.bodies.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }
}

/// Settings for the Earth survival estimate.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SurvivalConfig {
    /// Evaluation year; the system clock is used when absent
    #[serde(default)]
    pub year: Option<i32>,

    /// Present-day ratings of Earth; the built-in estimates are used when absent
    #[serde(default)]
    pub factors: Option<FactorSet>,
}
