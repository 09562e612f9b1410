use serde::Serialize;
use std::fmt;

/// Colonization verdict for a single habitability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Habitable,
    MarginallyHabitable,
    Uninhabitable,
}

impl Verdict {
    pub const HABITABLE_MIN: f64 = 60.0;
    pub const MARGINAL_MIN: f64 = 30.0;

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Habitable => "HABITABLE",
            Verdict::MarginallyHabitable => "MARGINALLY HABITABLE",
            Verdict::Uninhabitable => "UNINHABITABLE",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Verdict::Habitable => "Meets minimum requirements",
            Verdict::MarginallyHabitable => "Requires additional technology",
            Verdict::Uninhabitable => "Extremely hostile conditions",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.description())
    }
}

/// Map a habitability score to its verdict band (closed-open, highest first).
pub fn classify(score: f64) -> Verdict {
    if score >= Verdict::HABITABLE_MIN {
        Verdict::Habitable
    } else if score >= Verdict::MARGINAL_MIN {
        Verdict::MarginallyHabitable
    } else {
        Verdict::Uninhabitable
    }
}

/// Qualitative reading of a long-run survival probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurvivalAssessment {
    Excellent,
    Good,
    Moderate,
    Concerning,
    Critical,
    Extreme,
}

impl SurvivalAssessment {
    pub fn label(self) -> &'static str {
        match self {
            SurvivalAssessment::Excellent => "Excellent",
            SurvivalAssessment::Good => "Good",
            SurvivalAssessment::Moderate => "Moderate",
            SurvivalAssessment::Concerning => "Concerning",
            SurvivalAssessment::Critical => "Critical",
            SurvivalAssessment::Extreme => "Extreme",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SurvivalAssessment::Excellent => "Ideal conditions for long-term human survival",
            SurvivalAssessment::Good => "Stable conditions for human survival",
            SurvivalAssessment::Moderate => "Some significant but manageable risks",
            SurvivalAssessment::Concerning => "Substantial risks to human survival",
            SurvivalAssessment::Critical => "Human survival at risk in the medium term",
            SurvivalAssessment::Extreme => "Human survival severely compromised",
        }
    }
}

impl fmt::Display for SurvivalAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label(), self.description())
    }
}

/// Map a survival probability to one of six tiers (thresholds 90/75/60/40/20).
pub fn assess_survival(probability: f64) -> SurvivalAssessment {
    if probability >= 90.0 {
        SurvivalAssessment::Excellent
    } else if probability >= 75.0 {
        SurvivalAssessment::Good
    } else if probability >= 60.0 {
        SurvivalAssessment::Moderate
    } else if probability >= 40.0 {
        SurvivalAssessment::Concerning
    } else if probability >= 20.0 {
        SurvivalAssessment::Critical
    } else {
        SurvivalAssessment::Extreme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(60.0), Verdict::Habitable);
        assert_eq!(classify(59.999), Verdict::MarginallyHabitable);
        assert_eq!(classify(30.0), Verdict::MarginallyHabitable);
        assert_eq!(classify(29.999), Verdict::Uninhabitable);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(classify(100.0), Verdict::Habitable);
        assert_eq!(classify(0.0), Verdict::Uninhabitable);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(
            Verdict::MarginallyHabitable.to_string(),
            "MARGINALLY HABITABLE (Requires additional technology)"
        );
    }

    #[test]
    fn test_assess_survival_tiers() {
        assert_eq!(assess_survival(95.0), SurvivalAssessment::Excellent);
        assert_eq!(assess_survival(90.0), SurvivalAssessment::Excellent);
        assert_eq!(assess_survival(89.9), SurvivalAssessment::Good);
        assert_eq!(assess_survival(75.0), SurvivalAssessment::Good);
        assert_eq!(assess_survival(60.0), SurvivalAssessment::Moderate);
        assert_eq!(assess_survival(40.0), SurvivalAssessment::Concerning);
        assert_eq!(assess_survival(20.0), SurvivalAssessment::Critical);
        assert_eq!(assess_survival(19.99), SurvivalAssessment::Extreme);
        assert_eq!(assess_survival(0.0), SurvivalAssessment::Extreme);
    }

    #[test]
    fn test_classifiers_are_independent() {
        // 65 is habitable for a colony but only moderate for long-run survival
        assert_eq!(classify(65.0), Verdict::Habitable);
        assert_eq!(assess_survival(65.0), SurvivalAssessment::Moderate);
    }
}
