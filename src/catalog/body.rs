use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::factors::FactorSet;

/// A celestial body a colony could be sent to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyProfile {
    pub name: String,
    /// Distance from Earth in astronomical units
    pub distance_au: f64,
    /// Estimated one-way travel time with current technology, in years
    pub travel_time_years: f64,
    /// Distance from the body's own star in astronomical units
    pub star_distance_au: f64,
    /// Whether the body orbits inside its star's habitable zone
    pub habitable_zone: bool,
    pub factors: FactorSet,
}

impl BodyProfile {
    /// Check name and astronomical data. Factors are validated when the
    /// `FactorSet` is built.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidBody("name must not be empty".to_string()));
        }
        let distances = [
            ("distance_au", self.distance_au),
            ("travel_time_years", self.travel_time_years),
            ("star_distance_au", self.star_distance_au),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidBody(format!(
                    "{}.{} must be a non-negative number (got {})",
                    self.name, field, value
                )));
            }
        }
        Ok(())
    }
}
