use serde::Serialize;

use super::mission::MissionParameters;

/// Ceiling on reproductive efficiency reached by a perfect score.
pub const MAX_REPRODUCTIVE_EFFICIENCY: f64 = 0.8;
/// Years between successive births for one couple.
pub const GESTATION_INTERVAL_YEARS: f64 = 1.5;
/// Share of frozen embryos assumed to come to term.
pub const EMBRYO_VIABILITY: f64 = 0.9;
/// Child survival rate at a score of zero.
pub const BASE_SURVIVAL_RATE: f64 = 0.7;
/// Extra child survival a perfect score adds on top of the base rate.
pub const SURVIVAL_RATE_RANGE: f64 = 0.3;

/// Untruncated intermediate values of a projection.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionBreakdown {
    pub reproductive_factor: f64,
    pub fertile_couples: u32,
    pub potential_births: f64,
    pub embryo_contribution: f64,
    pub total_children: f64,
    pub surviving_children: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopulationOutcome {
    /// Children born over the mission, truncated toward zero
    pub potential_births: u64,
    /// Children that survive, truncated toward zero
    pub surviving_children: u64,
    /// Child survival fraction in `[0.7, 1.0]`
    pub survival_rate: f64,
    /// Initial colonists plus surviving children
    pub final_population: u64,
    pub breakdown: ProjectionBreakdown,
}

impl PopulationOutcome {
    /// Share of born children that survived, in percent.
    ///
    /// Uses the truncated counts. Returns 0 when no child is born instead of
    /// dividing by zero.
    pub fn surviving_percent(&self) -> f64 {
        if self.potential_births == 0 {
            0.0
        } else {
            self.surviving_children as f64 / self.potential_births as f64 * 100.0
        }
    }
}

/// Project colony growth for a mission landing on a body with `score`.
pub fn project(score: f64, mission: &MissionParameters) -> PopulationOutcome {
    let reproductive_factor = (score / 100.0) * MAX_REPRODUCTIVE_EFFICIENCY;

    let fertile_couples = mission.males.min(mission.females);
    let potential_births = f64::from(fertile_couples) * (mission.duration_years / GESTATION_INTERVAL_YEARS);

    let embryo_contribution = f64::from(mission.frozen_embryos) * EMBRYO_VIABILITY;

    let total_children = (potential_births + embryo_contribution) * reproductive_factor;

    let survival_rate = BASE_SURVIVAL_RATE + (score / 100.0) * SURVIVAL_RATE_RANGE;
    let surviving_children = total_children * survival_rate;

    // `as` truncates toward zero and saturates at u64::MAX
    let born = total_children as u64;
    let surviving = surviving_children as u64;

    tracing::debug!(
        score,
        fertile_couples,
        total_children,
        surviving_children,
        "projected population"
    );

    PopulationOutcome {
        potential_births: born,
        surviving_children: surviving,
        survival_rate,
        final_population: mission.colonists().saturating_add(surviving),
        breakdown: ProjectionBreakdown {
            reproductive_factor,
            fertile_couples,
            potential_births,
            embryo_contribution,
            total_children,
            surviving_children,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_small_crew_projection() {
        let mission = MissionParameters::new(2, 2, 0, 3.0).unwrap();
        let outcome = project(80.0, &mission);

        assert!(close(outcome.breakdown.reproductive_factor, 0.64));
        assert_eq!(outcome.breakdown.fertile_couples, 2);
        assert!(close(outcome.breakdown.potential_births, 4.0));
        assert!(close(outcome.breakdown.total_children, 2.56));
        assert_eq!(outcome.potential_births, 2);
        assert!(close(outcome.survival_rate, 0.94));
        assert!(close(outcome.breakdown.surviving_children, 2.4064));
        assert_eq!(outcome.surviving_children, 2);
        assert_eq!(outcome.final_population, 6);
    }

    #[test]
    fn test_fertile_couples_limited_by_smaller_group() {
        let mission = MissionParameters::new(10, 3, 0, 1.5).unwrap();
        let outcome = project(100.0, &mission);
        assert_eq!(outcome.breakdown.fertile_couples, 3);
        assert!(close(outcome.breakdown.potential_births, 3.0));
    }

    #[test]
    fn test_embryos_contribute_without_couples() {
        let mission = MissionParameters::new(5, 0, 100, 10.0).unwrap();
        let outcome = project(100.0, &mission);
        // 100 * 0.9 * 0.8 = 72, all survive at a perfect score
        assert!(close(outcome.breakdown.embryo_contribution, 90.0));
        assert_eq!(outcome.potential_births, 72);
        assert!(close(outcome.survival_rate, 1.0));
        assert_eq!(outcome.surviving_children, 72);
        assert_eq!(outcome.final_population, 77);
    }

    #[test]
    fn test_zero_score_has_no_births() {
        let mission = MissionParameters::new(50, 50, 100, 20.0).unwrap();
        let outcome = project(0.0, &mission);
        assert_eq!(outcome.potential_births, 0);
        assert_eq!(outcome.surviving_children, 0);
        assert!(close(outcome.survival_rate, 0.7));
        assert_eq!(outcome.final_population, 100);
    }

    #[test]
    fn test_final_population_never_below_colonists() {
        for score in [0.0, 10.0, 45.5, 60.0, 96.69, 100.0] {
            for (m, f, e, years) in [(0, 0, 0, 1.0), (1, 0, 3, 0.5), (7, 9, 12, 4.2), (100, 80, 0, 40.0)] {
                let mission = MissionParameters::new(m, f, e, years).unwrap();
                let outcome = project(score, &mission);
                assert!(outcome.final_population >= mission.colonists());
                assert!(outcome.surviving_children <= outcome.potential_births);
            }
        }
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 1 couple, 1.5 years, score 100: 1 * 0.8 = 0.8 children
        let mission = MissionParameters::new(1, 1, 0, 1.5).unwrap();
        let outcome = project(100.0, &mission);
        assert!(close(outcome.breakdown.total_children, 0.8));
        assert_eq!(outcome.potential_births, 0);
    }

    #[test]
    fn test_surviving_percent_guards_zero_births() {
        let mission = MissionParameters::new(1, 1, 0, 1.5).unwrap();
        let outcome = project(100.0, &mission);
        assert!(outcome.breakdown.total_children > 0.0);
        assert_eq!(outcome.surviving_percent(), 0.0);
    }

    #[test]
    fn test_surviving_percent_uses_truncated_counts() {
        let mission = MissionParameters::new(2, 2, 0, 3.0).unwrap();
        let outcome = project(80.0, &mission);
        assert!(close(outcome.surviving_percent(), 100.0));
    }

    #[test]
    fn test_very_long_mission_saturates() {
        let mission = MissionParameters::new(1, 1, 0, 1e20).unwrap();
        let outcome = project(100.0, &mission);
        assert_eq!(outcome.potential_births, u64::MAX);
        assert_eq!(outcome.final_population, u64::MAX);
        assert!(outcome.final_population >= mission.colonists());
    }
}
