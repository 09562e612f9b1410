use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{compare, Comparison};
use crate::catalog::{BodyCatalog, BodyProfile, ReferenceBody};
use crate::error::{CoreError, CoreResult};
use crate::factors::WeightTable;
use crate::population::{project, MissionParameters, PopulationOutcome};

pub const SESSION_VERSION: u32 = 1;

/// Everything the user has chosen so far: the active body and the mission.
///
/// Passed explicitly to the operations that need it; there is no global
/// "current body".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub version: u32,
    #[serde(default)]
    pub catalog: BodyCatalog,
    #[serde(default)]
    pub mission: Option<MissionParameters>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a new empty session with version 1
    pub fn new() -> Self {
        Self {
            version: SESSION_VERSION,
            catalog: BodyCatalog::new(),
            mission: None,
            updated_at: None,
        }
    }

    pub fn select_reference(&mut self, body: ReferenceBody) {
        self.catalog.select_reference(body);
        self.touch();
    }

    pub fn set_custom(&mut self, profile: BodyProfile) -> CoreResult<()> {
        self.catalog.set_custom(profile)?;
        self.touch();
        Ok(())
    }

    /// Replace the mission parameters after validating them.
    pub fn set_mission(&mut self, mission: MissionParameters) -> CoreResult<()> {
        mission.validate()?;
        self.mission = Some(mission);
        self.touch();
        Ok(())
    }

    pub fn active_body(&self) -> CoreResult<BodyProfile> {
        self.catalog.active().ok_or(CoreError::NoBodySelected)
    }

    pub fn mission(&self) -> CoreResult<&MissionParameters> {
        self.mission.as_ref().ok_or(CoreError::NoMissionDefined)
    }

    /// Project colony growth for `score` under the session's mission.
    pub fn projection(&self, score: f64) -> CoreResult<PopulationOutcome> {
        Ok(project(score, self.mission()?))
    }

    /// Compare the active body with Earth. The projection is included only
    /// when mission parameters have been set.
    pub fn comparison(&self, weights: &WeightTable) -> CoreResult<Comparison> {
        let body = self.active_body()?;
        Ok(compare(&BodyCatalog::earth(), &body, weights, self.mission.as_ref()))
    }

    /// Re-check the custom body and mission, e.g. after loading from disk.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(custom) = self.catalog.custom() {
            custom.validate()?;
        }
        if let Some(ref mission) = self.mission {
            mission.validate()?;
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
