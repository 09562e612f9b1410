use serde::Serialize;

use crate::catalog::BodyProfile;
use crate::factors::WeightTable;
use crate::population::{project, MissionParameters, PopulationOutcome};
use crate::scoring::{calculate_score, classify, ScoreResult, Verdict};

/// Mission parameters together with their projected outcome.
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub mission: MissionParameters,
    pub outcome: PopulationOutcome,
}

/// A body scored side by side with Earth.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub earth: BodyProfile,
    pub earth_score: ScoreResult,
    pub body: BodyProfile,
    pub body_score: ScoreResult,
    /// Absolute gap between the two scores, in points
    pub difference: f64,
    pub verdict: Verdict,
    pub projection: Option<Projection>,
}

/// Score `body` against `earth` and, when a mission is given, project the
/// colony's growth on `body`.
pub fn compare(
    earth: &BodyProfile,
    body: &BodyProfile,
    weights: &WeightTable,
    mission: Option<&MissionParameters>,
) -> Comparison {
    let earth_score = calculate_score(&earth.factors, weights, earth.habitable_zone);
    let body_score = calculate_score(&body.factors, weights, body.habitable_zone);
    let verdict = classify(body_score.score);

    let projection = mission.map(|mission| Projection {
        mission: *mission,
        outcome: project(body_score.score, mission),
    });

    Comparison {
        difference: (earth_score.score - body_score.score).abs(),
        earth: earth.clone(),
        earth_score,
        body: body.clone(),
        body_score,
        verdict,
        projection,
    }
}
