//! Long-run species survival estimate for Earth.
//!
//! Unlike [`calculate_score`](super::engine::calculate_score), which rates a
//! body on the absolute 0-100 scale, this variant compares each factor to a
//! per-factor ideal and degrades the result by how far the evaluation year
//! has drifted from the reference epoch.

use chrono::Datelike;
use serde::Serialize;

use crate::factors::{Factor, FactorSet, IdealTable, WeightTable};

/// Reference epoch for environmental degradation.
pub const BASE_YEAR: i32 = 2000;

/// Fraction of survivability lost per year after [`BASE_YEAR`].
pub const DEGRADATION_PER_YEAR: f64 = 0.002;

/// Degradation multiplier for `current_year` relative to `base_year`.
///
/// `1 - min(1, (current_year - base_year) * 0.002)`. Reaches 0.0 once the
/// gap is 500 years. Years before the base are not floored; the final
/// probability clamp absorbs them.
pub fn decay_factor(current_year: i32, base_year: i32) -> f64 {
    let years = f64::from(current_year) - f64::from(base_year);
    1.0 - (years * DEGRADATION_PER_YEAR).min(1.0)
}

/// Current calendar year from the system clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// How close `value` comes to `ideal`, in `[0, 1]`.
/// Values above the ideal are not rewarded.
pub fn clamped_ratio(value: f64, ideal: f64) -> f64 {
    (value.min(100.0) / ideal).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorAssessment {
    pub factor: Factor,
    pub value: f64,
    pub ideal: f64,
    /// `clamped_ratio(value, ideal)` as a percentage
    pub score_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurvivalEstimate {
    /// Survival probability in `[0, 100]`
    pub probability: f64,
    pub year: i32,
    pub decay: f64,
    pub factors: Vec<FactorAssessment>,
}

/// Survival probability on the 0-100 scale.
///
/// `clamp(0, 100, Σ(clamped_ratio(value, ideal) * weight) * decay / Σweight * 100)`
pub fn survival_probability(factors: &FactorSet, weights: &WeightTable, ideals: &IdealTable, decay: f64) -> f64 {
    let weighted: f64 = factors
        .iter()
        .map(|(factor, value)| clamped_ratio(value, ideals.get(factor)) * weights.get(factor))
        .sum();

    let probability = (weighted * decay / weights.total()) * 100.0;
    probability.clamp(0.0, 100.0)
}

/// Full survival estimate for `year`, including the per-factor report.
pub fn estimate_survival(
    factors: &FactorSet,
    weights: &WeightTable,
    ideals: &IdealTable,
    year: i32,
) -> SurvivalEstimate {
    let decay = decay_factor(year, BASE_YEAR);
    let probability = survival_probability(factors, weights, ideals, decay);

    let assessments = factors
        .iter()
        .map(|(factor, value)| {
            let ideal = ideals.get(factor);
            FactorAssessment {
                factor,
                value,
                ideal,
                score_percent: clamped_ratio(value, ideal) * 100.0,
            }
        })
        .collect();

    tracing::debug!(year, decay, probability, "estimated survival probability");

    SurvivalEstimate {
        probability,
        year,
        decay,
        factors: assessments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::presets;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_decay_at_base_year() {
        assert_eq!(decay_factor(2000, BASE_YEAR), 1.0);
    }

    #[test]
    fn test_decay_after_a_century() {
        assert!(close(decay_factor(2100, BASE_YEAR), 0.8));
    }

    #[test]
    fn test_decay_floors_at_zero() {
        assert_eq!(decay_factor(2500, BASE_YEAR), 0.0);
        assert_eq!(decay_factor(3200, BASE_YEAR), 0.0);
    }

    #[test]
    fn test_decay_is_non_increasing() {
        let mut previous = decay_factor(1990, BASE_YEAR);
        for year in 1991..2600 {
            let current = decay_factor(year, BASE_YEAR);
            assert!(current <= previous, "year {}", year);
            previous = current;
        }
    }

    #[test]
    fn test_decay_custom_base_year() {
        assert!(close(decay_factor(2150, 2100), 0.9));
    }

    #[test]
    fn test_decay_extreme_years() {
        assert!(decay_factor(i32::MIN, BASE_YEAR) > 1.0);
        assert_eq!(decay_factor(i32::MAX, BASE_YEAR), 0.0);
        assert_eq!(decay_factor(i32::MAX, i32::MIN), 0.0);

        let earth = presets::earth().factors;
        let estimate = estimate_survival(&earth, &WeightTable::standard(), &IdealTable::standard(), i32::MIN);
        assert_eq!(estimate.probability, 100.0);
    }

    #[test]
    fn test_clamped_ratio() {
        assert!(close(clamped_ratio(45.0, 90.0), 0.5));
        assert_eq!(clamped_ratio(95.0, 90.0), 1.0);
        assert_eq!(clamped_ratio(0.0, 90.0), 0.0);
    }

    #[test]
    fn test_reference_earth_is_certain_at_base_year() {
        let earth = presets::earth().factors;
        let p = survival_probability(&earth, &WeightTable::standard(), &IdealTable::standard(), 1.0);
        assert!(close(p, 100.0));
    }

    #[test]
    fn test_current_era_defaults() {
        let current = presets::current_era_earth();
        let estimate = estimate_survival(&current, &WeightTable::standard(), &IdealTable::standard(), 2026);
        assert!(close(estimate.decay, 0.948));
        assert!((estimate.probability - 71.3965).abs() < 1e-3);
        assert_eq!(estimate.factors.len(), Factor::COUNT);
    }

    #[test]
    fn test_probability_clamped_before_base_year() {
        let earth = presets::earth().factors;
        let decay = decay_factor(1900, BASE_YEAR);
        assert!(decay > 1.0);
        let p = survival_probability(&earth, &WeightTable::standard(), &IdealTable::standard(), decay);
        assert_eq!(p, 100.0);
    }

    #[test]
    fn test_probability_zero_after_full_decay() {
        let earth = presets::earth().factors;
        let estimate = estimate_survival(&earth, &WeightTable::standard(), &IdealTable::standard(), 2600);
        assert_eq!(estimate.probability, 0.0);
    }

    #[test]
    fn test_factor_report_caps_at_hundred_percent() {
        let current = presets::current_era_earth();
        let estimate = estimate_survival(&current, &WeightTable::standard(), &IdealTable::standard(), 2000);
        let tech = estimate
            .factors
            .iter()
            .find(|a| a.factor == Factor::TechnologyDevelopment)
            .unwrap();
        // 80 against an ideal of 70
        assert_eq!(tech.score_percent, 100.0);
    }
}
