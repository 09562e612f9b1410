use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Crew and cargo of a colonization mission.
///
/// Counts are unsigned, so only the duration needs runtime validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionParameters {
    pub males: u32,
    pub females: u32,
    pub frozen_embryos: u32,
    /// Planned mission duration in years
    pub duration_years: f64,
}

impl MissionParameters {
    pub fn new(males: u32, females: u32, frozen_embryos: u32, duration_years: f64) -> CoreResult<Self> {
        let mission = Self {
            males,
            females,
            frozen_embryos,
            duration_years,
        };
        mission.validate()?;
        Ok(mission)
    }

    /// Check the duration is a positive, finite number of years.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.duration_years.is_finite() || self.duration_years <= 0.0 {
            return Err(CoreError::InvalidMission(format!(
                "duration must be a positive number of years (got {})",
                self.duration_years
            )));
        }
        Ok(())
    }

    pub fn colonists(&self) -> u64 {
        u64::from(self.males) + u64::from(self.females)
    }
}
