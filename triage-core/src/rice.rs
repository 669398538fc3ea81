//! RICE scoring: log-compressed reach times impact and confidence, over effort.

use serde::{Deserialize, Serialize};

use crate::rule::Impact;

/// Inclusive lower score bound for the critical tier.
pub const CRITICAL_SCORE: f64 = 15.0;
/// Inclusive lower score bound for the high tier.
pub const HIGH_SCORE: f64 = 10.0;
/// Inclusive lower score bound for the medium tier; anything below is low.
pub const MEDIUM_SCORE: f64 = 5.0;

/// Effort floor: estimates under 0.1h would blow the quotient up.
pub const MIN_EFFORT_HOURS: f64 = 0.1;

/// Compute a RICE score.
///
/// Reach is compressed through log10 so raw counts do not dominate linearly
/// (500 overdue invoices should outrank 5, not drown out everything else).
pub fn score(reach: u64, impact: Impact, confidence: f64, effort_hours: f64) -> f64 {
    let normalized_reach = (reach.max(1) as f64 + 1.0).log10() * 10.0;
    normalized_reach * impact.weight() * confidence / effort_hours.max(MIN_EFFORT_HOURS)
}

/// Display tier, derived from the score by fixed breakpoints.
///
/// Declaration order gives `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "critical")]
    Critical,
}

impl Priority {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= CRITICAL_SCORE => Priority::Critical,
            s if s >= HIGH_SCORE => Priority::High,
            s if s >= MEDIUM_SCORE => Priority::Medium,
            _ => Priority::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Numeric rank (low=1 .. critical=4).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Critical => 4,
        }
    }
}

/// Full scoring breakdown carried on every generated task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiceScore {
    pub reach: u64,
    pub impact: Impact,
    pub confidence: f64,
    pub effort_hours: f64,
    pub score: f64,
}

impl RiceScore {
    pub fn compute(reach: u64, impact: Impact, confidence: f64, effort_hours: f64) -> Self {
        Self {
            reach,
            impact,
            confidence,
            effort_hours,
            score: score(reach, impact, confidence, effort_hours),
        }
    }

    pub fn priority(&self) -> Priority {
        Priority::from_score(self.score)
    }
}
