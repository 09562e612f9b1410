use serde::Serialize;

use crate::factors::{Factor, FactorSet, WeightTable};

/// Multiplier applied to bodies orbiting inside their star's habitable zone.
pub const HABITABLE_ZONE_BONUS: f64 = 1.1;

#[derive(Debug, Clone, Serialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub value: f64,
    pub weight: f64,
    /// `value / 100 * weight`, before normalization by the weight total
    pub weighted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    /// Normalized weighted score on the 0-100 scale, before the bonus
    pub raw_score: f64,
    pub habitable_zone_bonus: bool,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Habitability score on the absolute 0-100 scale.
///
/// Each factor contributes `value / 100 * weight`; the sum is normalized by
/// the weight total. Habitable-zone bodies get a 10% bonus, capped so the
/// normalized sum never exceeds 1.0.
pub fn calculate_score(factors: &FactorSet, weights: &WeightTable, habitable_zone: bool) -> ScoreResult {
    let mut total = 0.0;
    let mut contributions = Vec::with_capacity(Factor::COUNT);

    for (factor, value) in factors.iter() {
        let weight = weights.get(factor);
        let weighted = (value / 100.0) * weight;
        total += weighted;
        contributions.push(FactorContribution {
            factor,
            value,
            weight,
            weighted,
        });
    }

    let normalized = total / weights.total();
    let raw_score = normalized * 100.0;

    let adjusted = if habitable_zone {
        (normalized * HABITABLE_ZONE_BONUS).min(1.0)
    } else {
        normalized
    };
    let score = adjusted * 100.0;

    tracing::debug!(raw_score, score, habitable_zone, "calculated habitability score");

    ScoreResult {
        score,
        breakdown: ScoreBreakdown {
            raw_score,
            habitable_zone_bonus: habitable_zone,
            factors: contributions,
        },
    }
}
