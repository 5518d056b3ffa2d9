use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::Beginner => write!(f, "beginner"),
            ExperienceLevel::Intermediate => write!(f, "intermediate"),
            ExperienceLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Exact, case-sensitive match on the questionnaire values.
    pub fn from_answer(raw: &str) -> Option<Self> {
        match raw {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }

    pub fn profile(self) -> &'static RiskProfile {
        match self {
            ExperienceLevel::Beginner => &BEGINNER,
            ExperienceLevel::Intermediate => &INTERMEDIATE,
            ExperienceLevel::Advanced => &ADVANCED,
        }
    }
}

/// Risk budget fractions for one experience level.
///
/// `daily_risk >= trade_risk` holds for every level, so a day split across
/// several trades never needs more than the daily cap before multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskProfile {
    pub daily_risk: f64,
    pub trade_risk: f64,
    pub min_rr: f64,
}

static BEGINNER: RiskProfile = RiskProfile {
    daily_risk: 0.04,
    trade_risk: 0.02,
    min_rr: 2.0,
};

static INTERMEDIATE: RiskProfile = RiskProfile {
    daily_risk: 0.05,
    trade_risk: 0.025,
    min_rr: 2.5,
};

static ADVANCED: RiskProfile = RiskProfile {
    daily_risk: 0.06,
    trade_risk: 0.03,
    min_rr: 3.0,
};
