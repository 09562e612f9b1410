pub mod engine;
pub mod survival;
pub mod verdict;

pub use engine::{calculate_score, FactorContribution, ScoreBreakdown, ScoreResult, HABITABLE_ZONE_BONUS};
pub use survival::{
    clamped_ratio, current_year, decay_factor, estimate_survival, survival_probability, FactorAssessment,
    SurvivalEstimate, BASE_YEAR,
};
pub use verdict::{assess_survival, classify, SurvivalAssessment, Verdict};
