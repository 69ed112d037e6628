//! TriageSession - state machine driving the questionnaire.
//!
//! ```text
//! AwaitingAnswer(0) -> AwaitingAnswer(1) -> ... -> AwaitingAnswer(N-1) -> Complete
//! ```
//!
//! `Complete` is terminal. A new session must be created to screen again.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, ValidationError};

use super::answers::AnswerSet;
use super::errors::TriageError;
use super::question::{Question, QuestionCatalog};
use super::risk::{RiskAssessment, RiskEngine};

/// Coarse lifecycle status of a triage session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageStatus {
    AwaitingAnswer,
    Complete,
}

impl StateMachine for TriageStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use TriageStatus::*;
        matches!(
            (self, target),
            (AwaitingAnswer, AwaitingAnswer) | (AwaitingAnswer, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            TriageStatus::AwaitingAnswer => {
                vec![TriageStatus::AwaitingAnswer, TriageStatus::Complete]
            }
            TriageStatus::Complete => vec![],
        }
    }
}

/// Full state of a session, including the data owned by each state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TriageState {
    AwaitingAnswer {
        index: usize,
        answers: AnswerSet,
    },
    Complete {
        answers: AnswerSet,
        assessment: RiskAssessment,
    },
}

/// Outcome of a successful [`TriageSession::submit_answer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriageProgress {
    /// More questions remain; `question` is the next one to ask.
    NextQuestion {
        index: usize,
        question: &'static Question,
    },
    /// The last question was answered and the answers were scored.
    Completed(RiskAssessment),
}

/// One guided screening flow over a question catalog.
///
/// # Invariants
///
/// - In `AwaitingAnswer { index, .. }`, `index < catalog.len()`
/// - `answers` only holds catalog ids, one entry per answered question
/// - The assessment is computed exactly once, on the final answer
///
/// Deserialization reattaches the standard catalog and rejects states that
/// break these invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredSession")]
pub struct TriageSession {
    #[serde(skip, default = "QuestionCatalog::standard")]
    catalog: &'static QuestionCatalog,
    state: TriageState,
}

impl TriageSession {
    /// Starts a session over the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(QuestionCatalog::standard())
    }

    /// Starts a session over a custom catalog.
    ///
    /// An empty catalog has nothing to ask, so the session starts complete.
    pub fn with_catalog(catalog: &'static QuestionCatalog) -> Self {
        let state = if catalog.is_empty() {
            let answers = AnswerSet::new();
            let assessment = RiskEngine::assess(&answers);
            TriageState::Complete { answers, assessment }
        } else {
            TriageState::AwaitingAnswer {
                index: 0,
                answers: AnswerSet::new(),
            }
        };
        Self { catalog, state }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &'static QuestionCatalog {
        self.catalog
    }

    pub fn state(&self) -> &TriageState {
        &self.state
    }

    pub fn status(&self) -> TriageStatus {
        match self.state {
            TriageState::AwaitingAnswer { .. } => TriageStatus::AwaitingAnswer,
            TriageState::Complete { .. } => TriageStatus::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == TriageStatus::Complete
    }

    /// Index of the question awaiting an answer; `None` once complete.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            TriageState::AwaitingAnswer { index, .. } => Some(index),
            TriageState::Complete { .. } => None,
        }
    }

    /// The question awaiting an answer; `None` once complete.
    pub fn current_question(&self) -> Option<&'static Question> {
        self.current_index().and_then(|i| self.catalog.get(i))
    }

    pub fn answers(&self) -> &AnswerSet {
        match &self.state {
            TriageState::AwaitingAnswer { answers, .. } => answers,
            TriageState::Complete { answers, .. } => answers,
        }
    }

    /// The assessment, available only once complete.
    pub fn assessment(&self) -> Option<&RiskAssessment> {
        match &self.state {
            TriageState::AwaitingAnswer { .. } => None,
            TriageState::Complete { assessment, .. } => Some(assessment),
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers().len()
    }

    pub fn total_questions(&self) -> usize {
        self.catalog.len()
    }

    /// `(answered, total)` for progress indicators.
    pub fn progress(&self) -> (usize, usize) {
        (self.answered_count(), self.total_questions())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Records `option` for the current question and advances.
    ///
    /// # Errors
    ///
    /// - `AlreadyComplete` if every question has been answered
    /// - `InvalidOption` if `option` is not allowed for the current question
    ///
    /// On error the session is unchanged.
    pub fn submit_answer(&mut self, option: &str) -> Result<TriageProgress, TriageError> {
        if self.status().is_terminal() {
            return Err(TriageError::AlreadyComplete);
        }

        let catalog = self.catalog;
        let TriageState::AwaitingAnswer { index, answers } = &mut self.state else {
            return Err(TriageError::AlreadyComplete);
        };
        let Some(question) = catalog.get(*index) else {
            return Err(TriageError::AlreadyComplete);
        };

        if !question.allows(option) {
            return Err(TriageError::invalid_option(question.id, option, question.options));
        }

        answers.record(question.id, option);

        let next = *index + 1;
        if let Some(next_question) = catalog.get(next) {
            *index = next;
            return Ok(TriageProgress::NextQuestion {
                index: next,
                question: next_question,
            });
        }

        let answers = std::mem::take(answers);
        let assessment = RiskEngine::assess(&answers);
        self.state = TriageState::Complete {
            answers,
            assessment: assessment.clone(),
        };
        Ok(TriageProgress::Completed(assessment))
    }
}

impl Default for TriageSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted form of a session, before its invariants are checked.
#[derive(Deserialize)]
struct StoredSession {
    state: TriageState,
}

impl TryFrom<StoredSession> for TriageSession {
    type Error = ValidationError;

    fn try_from(stored: StoredSession) -> Result<Self, Self::Error> {
        let catalog = QuestionCatalog::standard();
        check_state(catalog, &stored.state)?;
        Ok(Self {
            catalog,
            state: stored.state,
        })
    }
}

fn check_state(catalog: &QuestionCatalog, state: &TriageState) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::invalid_format("state", reason);

    let (answers, expected) = match state {
        TriageState::AwaitingAnswer { index, answers } => {
            if *index >= catalog.len() {
                return Err(invalid(format!(
                    "question index {} is past the last question",
                    index
                )));
            }
            (answers, *index)
        }
        TriageState::Complete { answers, .. } => (answers, catalog.len()),
    };

    if answers.len() != expected {
        return Err(invalid(format!(
            "expected {} answers, found {}",
            expected,
            answers.len()
        )));
    }

    for question in catalog.iter().take(expected) {
        match answers.get(question.id) {
            Some(option) if question.allows(option) => {}
            Some(option) => {
                return Err(invalid(format!(
                    "'{}' is not an option for '{}'",
                    option, question.id
                )))
            }
            None => return Err(invalid(format!("missing answer for '{}'", question.id))),
        }
    }

    if let TriageState::Complete { answers, assessment } = state {
        if *assessment != RiskEngine::assess(answers) {
            return Err(invalid("assessment does not match the answers".to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triage::risk::RiskTier;

    fn answer_all(session: &mut TriageSession, options: &[&str]) -> TriageProgress {
        let mut last = None;
        for option in options {
            last = Some(session.submit_answer(option).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn new_session_awaits_first_question() {
        let session = TriageSession::new();
        assert_eq!(session.status(), TriageStatus::AwaitingAnswer);
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.current_question().unwrap().id, "itch");
        assert!(session.answers().is_empty());
        assert!(session.assessment().is_none());
    }

    #[test]
    fn answering_advances_to_next_question() {
        let mut session = TriageSession::new();
        let progress = session.submit_answer("Yes").unwrap();

        match progress {
            TriageProgress::NextQuestion { index, question } => {
                assert_eq!(index, 1);
                assert_eq!(question.id, "duration");
            }
            other => panic!("expected next question, got {:?}", other),
        }
        assert_eq!(session.answers().get("itch"), Some("Yes"));
        assert_eq!(session.progress(), (1, 4));
    }

    #[test]
    fn final_answer_completes_with_engine_assessment() {
        let mut session = TriageSession::new();
        let progress = answer_all(&mut session, &["Yes", "More than 2 weeks", "Yes", "Yes"]);

        let expected = RiskEngine::assess(session.answers());
        assert_eq!(progress, TriageProgress::Completed(expected.clone()));
        assert!(session.is_complete());
        assert_eq!(session.assessment(), Some(&expected));
        assert_eq!(expected.tier(), RiskTier::High);
        assert!(session.answers().is_complete_for(session.catalog()));
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn answering_after_completion_is_rejected_without_rescoring() {
        let mut session = TriageSession::new();
        answer_all(&mut session, &["Yes", "1 week", "No", "No"]);
        let before = session.clone();

        let result = session.submit_answer("Yes");

        assert_eq!(result, Err(TriageError::AlreadyComplete));
        assert_eq!(session, before);
    }

    #[test]
    fn invalid_option_leaves_session_unchanged() {
        let mut session = TriageSession::new();
        session.submit_answer("No").unwrap();
        let before = session.clone();

        let result = session.submit_answer("Yes");

        assert!(matches!(
            result,
            Err(TriageError::InvalidOption { ref question_id, .. }) if question_id == "duration"
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn complete_status_is_terminal() {
        assert!(TriageStatus::Complete.is_terminal());
        assert!(!TriageStatus::AwaitingAnswer.is_terminal());
        assert!(TriageStatus::AwaitingAnswer
            .transition_to(TriageStatus::Complete)
            .is_ok());
        assert!(TriageStatus::Complete
            .transition_to(TriageStatus::AwaitingAnswer)
            .is_err());
    }

    #[test]
    fn empty_catalog_starts_complete_and_low() {
        static EMPTY: QuestionCatalog = QuestionCatalog::new(&[]);
        let session = TriageSession::with_catalog(&EMPTY);
        assert!(session.is_complete());
        assert_eq!(session.assessment().unwrap().tier(), RiskTier::Low);
    }

    #[test]
    fn custom_catalog_is_walked_in_order() {
        static SHORT: QuestionCatalog = QuestionCatalog::new(&[Question {
            id: "pain",
            prompt: "Does it hurt?",
            options: &["Yes", "No"],
        }]);
        let mut session = TriageSession::with_catalog(&SHORT);

        let progress = session.submit_answer("Yes").unwrap();

        match progress {
            TriageProgress::Completed(assessment) => {
                assert_eq!(assessment.score(), 3);
                assert_eq!(assessment.tier(), RiskTier::Medium);
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[test]
    fn session_roundtrips_through_yaml() {
        let mut session = TriageSession::new();
        session.submit_answer("Yes").unwrap();
        session.submit_answer("1 week").unwrap();

        let yaml = serde_yaml::to_string(&session).unwrap();
        let restored: TriageSession = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(restored, session);
        assert_eq!(restored.current_question().unwrap().id, "spread");
    }

    #[test]
    fn out_of_range_index_is_rejected_on_load() {
        let json = serde_json::json!({
            "state": { "status": "awaiting_answer", "index": 7, "answers": {} }
        });

        let err = serde_json::from_value::<TriageSession>(json).unwrap_err();
        assert!(err.to_string().contains("past the last question"));
    }

    #[test]
    fn answer_count_must_match_index_on_load() {
        let json = serde_json::json!({
            "state": { "status": "awaiting_answer", "index": 2, "answers": { "itch": "Yes" } }
        });

        let err = serde_json::from_value::<TriageSession>(json).unwrap_err();
        assert!(err.to_string().contains("expected 2 answers, found 1"));
    }

    #[test]
    fn disallowed_stored_option_is_rejected_on_load() {
        let json = serde_json::json!({
            "state": { "status": "awaiting_answer", "index": 1, "answers": { "itch": "Maybe" } }
        });

        assert!(serde_json::from_value::<TriageSession>(json).is_err());
    }

    #[test]
    fn tampered_assessment_is_rejected_on_load() {
        let mut session = TriageSession::new();
        answer_all(&mut session, &["No", "< 3 days", "No", "No"]);
        let mut json = serde_json::to_value(&session).unwrap();
        json["state"]["assessment"]["risk"] = serde_json::json!("High");

        let err = serde_json::from_value::<TriageSession>(json).unwrap_err();
        assert!(err.to_string().contains("assessment does not match"));
    }

    #[test]
    fn serialized_state_is_tagged() {
        let session = TriageSession::new();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["state"]["status"], "awaiting_answer");
        assert_eq!(json["state"]["index"], 0);
    }
}
