//! Risk Engine - rule-based scoring of a completed questionnaire.
//!
//! Scoring is additive over fixed weights with no interaction terms. The
//! engine is total: unanswered questions contribute nothing, so a partial or
//! empty answer set still yields an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::answers::AnswerSet;
use super::question::{DURATION, ITCH, PAIN, SPREAD};

/// Minimum score classified as High.
pub const HIGH_THRESHOLD: u32 = 6;

/// Minimum score classified as Medium.
pub const MEDIUM_THRESHOLD: u32 = 3;

/// Points awarded when a question is answered with a specific option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRule {
    pub question_id: &'static str,
    pub trigger: &'static str,
    pub points: u32,
}

/// The fixed rule table applied by [`RiskEngine::assess`].
pub const SCORING_RULES: &[ScoringRule] = &[
    ScoringRule { question_id: ITCH, trigger: "Yes", points: 2 },
    ScoringRule { question_id: DURATION, trigger: "More than 2 weeks", points: 3 },
    ScoringRule { question_id: SPREAD, trigger: "Yes", points: 2 },
    ScoringRule { question_id: PAIN, trigger: "Yes", points: 3 },
];

const LOW_INSIGHT: &str = "Your condition appears low risk.";
const MEDIUM_INSIGHT: &str = "Your risk is elevated due to persistent or spreading symptoms.";
const HIGH_INSIGHT: &str =
    "Your risk is high due to prolonged duration and concerning symptoms like pain or spread.";

/// Ordinal risk category for a completed questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    /// Applies the thresholds, highest first, with inclusive lower bounds.
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            RiskTier::High
        } else if score >= MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    /// The fixed one-sentence insight shown with the result.
    pub fn insight(&self) -> &'static str {
        match self {
            RiskTier::Low => LOW_INSIGHT,
            RiskTier::Medium => MEDIUM_INSIGHT,
            RiskTier::High => HIGH_INSIGHT,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A tier label that is not one of Low, Medium or High.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown risk tier '{0}': expected Low, Medium or High")]
pub struct UnknownRiskTier(pub String);

impl FromStr for RiskTier {
    type Err = UnknownRiskTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskTier::ALL
            .into_iter()
            .find(|tier| tier.label() == s)
            .ok_or_else(|| UnknownRiskTier(s.to_string()))
    }
}

/// Score, tier and insight derived from an answer set.
///
/// Serialized as `{"risk": ..., "score": ..., "insight": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    score: u32,
    #[serde(rename = "risk")]
    tier: RiskTier,
    insight: String,
}

impl RiskAssessment {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tier(&self) -> RiskTier {
        self.tier
    }

    pub fn insight(&self) -> &str {
        &self.insight
    }
}

/// Stateless scorer.
pub struct RiskEngine;

impl RiskEngine {
    /// Sums the points of every rule whose trigger matches the recorded answer.
    pub fn score(answers: &AnswerSet) -> u32 {
        SCORING_RULES
            .iter()
            .filter(|rule| answers.get(rule.question_id) == Some(rule.trigger))
            .map(|rule| rule.points)
            .sum()
    }

    /// Maps an answer set to its assessment. Never fails.
    pub fn assess(answers: &AnswerSet) -> RiskAssessment {
        let score = Self::score(answers);
        let tier = RiskTier::from_score(score);
        RiskAssessment {
            score,
            tier,
            insight: tier.insight().to_string(),
        }
    }
}
