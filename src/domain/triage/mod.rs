//! Triage domain module.
//!
//! The guided questionnaire and the rule-based risk classification it feeds.
//!
//! # Components
//!
//! - `QuestionCatalog` - Static ordered questions with closed answer sets
//! - `RiskEngine` - Pure scorer mapping answers to score, tier and insight
//! - `TriageSession` - State machine walking the catalog one answer at a time
//! - `TriageSnapshot` - Key-value form of the outcome for client-side storage

mod answers;
mod errors;
mod question;
mod risk;
mod session;
mod snapshot;

pub use answers::AnswerSet;
pub use errors::TriageError;
pub use question::{Question, QuestionCatalog, DURATION, ITCH, PAIN, SPREAD};
pub use risk::{
    RiskAssessment, RiskEngine, RiskTier, ScoringRule, UnknownRiskTier, HIGH_THRESHOLD,
    MEDIUM_THRESHOLD, SCORING_RULES,
};
pub use session::{TriageProgress, TriageSession, TriageState, TriageStatus};
pub use snapshot::{SnapshotError, TriageSnapshot, ANSWERS_KEY, IMAGE_CANDIDATES_KEY, RESULT_KEY};
