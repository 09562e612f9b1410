use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::{Comparison, Projection};
use crate::catalog::BodyProfile;
use crate::factors::Factor;
use crate::scoring::{assess_survival, ScoreResult, SurvivalAssessment, SurvivalEstimate, Verdict};

#[derive(Debug, Serialize)]
struct ScoredBody<'a> {
    name: &'a str,
    score: f64,
    raw_score: f64,
    habitable_zone: bool,
    distance_au: f64,
    travel_time_years: f64,
    star_distance_au: f64,
}

impl<'a> ScoredBody<'a> {
    fn new(profile: &'a BodyProfile, result: &ScoreResult) -> Self {
        Self {
            name: &profile.name,
            score: result.score,
            raw_score: result.breakdown.raw_score,
            habitable_zone: profile.habitable_zone,
            distance_au: profile.distance_au,
            travel_time_years: profile.travel_time_years,
            star_distance_au: profile.star_distance_au,
        }
    }
}

#[derive(Debug, Serialize)]
struct FactorRow {
    factor: Factor,
    label: &'static str,
    earth: f64,
    body: f64,
}

#[derive(Debug, Serialize)]
struct ComparisonReport<'a> {
    earth: ScoredBody<'a>,
    body: ScoredBody<'a>,
    difference: f64,
    verdict: Verdict,
    verdict_label: &'static str,
    /// Both factor vectors in canonical factor order
    factors: Vec<FactorRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    projection: Option<&'a Projection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    surviving_percent: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SurvivalReport<'a> {
    #[serde(flatten)]
    estimate: &'a SurvivalEstimate,
    assessment: SurvivalAssessment,
}

/// Render a comparison as pretty JSON for external renderers.
pub fn comparison_json(comparison: &Comparison) -> Result<String> {
    let factors = comparison
        .earth
        .factors
        .iter()
        .map(|(factor, earth)| FactorRow {
            factor,
            label: factor.label(),
            earth,
            body: comparison.body.factors.get(factor),
        })
        .collect();

    let report = ComparisonReport {
        earth: ScoredBody::new(&comparison.earth, &comparison.earth_score),
        body: ScoredBody::new(&comparison.body, &comparison.body_score),
        difference: comparison.difference,
        verdict: comparison.verdict,
        verdict_label: comparison.verdict.label(),
        factors,
        projection: comparison.projection.as_ref(),
        surviving_percent: comparison
            .projection
            .as_ref()
            .map(|p| p.outcome.surviving_percent()),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize comparison")
}

/// Render a survival estimate as pretty JSON.
pub fn survival_json(estimate: &SurvivalEstimate) -> Result<String> {
    let report = SurvivalReport {
        estimate,
        assessment: assess_survival(estimate.probability),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize survival estimate")
}
