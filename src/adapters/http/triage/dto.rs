//! Request and response types for triage endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::adapters::http::copilot::CopilotResponse;
use crate::application::{ConverseResult, TriageResultView};
use crate::domain::guidance::{GuidanceTurn, Role};
use crate::domain::triage::{Question, RiskAssessment, TriageStatus};
use crate::ports::SessionRecord;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/triage/:id/answers`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub option: String,
}

/// Body of `POST /api/triage/:id/copilot`
#[derive(Debug, Clone, Deserialize)]
pub struct ConverseRequest {
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.to_string(),
            prompt: question.prompt.to_string(),
            options: question.options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
    pub total: usize,
}

/// Current state of a session, as the triage page needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResponse {
    pub session_id: String,
    pub status: String,
    pub answered: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionResponse>,
    pub answers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RiskAssessment>,
}

impl From<&SessionRecord> for TriageResponse {
    fn from(record: &SessionRecord) -> Self {
        let session = &record.session;
        let status = match session.status() {
            TriageStatus::AwaitingAnswer => "awaiting_answer",
            TriageStatus::Complete => "complete",
        };

        Self {
            session_id: record.id.to_string(),
            status: status.to_string(),
            answered: session.answered_count(),
            total: session.total_questions(),
            current_index: session.current_index(),
            current_question: session.current_question().map(QuestionResponse::from),
            answers: session
                .answers()
                .iter()
                .map(|(q, a)| (q.to_string(), a.to_string()))
                .collect(),
            result: session.assessment().cloned(),
        }
    }
}

/// Results page payload: assessment plus the next-steps panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResultResponse {
    pub session_id: String,
    pub score: u32,
    pub risk: String,
    pub insight: String,
    pub next_steps: Vec<String>,
}

impl From<TriageResultView> for TriageResultResponse {
    fn from(view: TriageResultView) -> Self {
        Self {
            session_id: view.session_id.to_string(),
            score: view.assessment.score(),
            risk: view.assessment.tier().to_string(),
            insight: view.assessment.insight().to_string(),
            next_steps: view.next_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub role: String,
    pub text: String,
    pub at: String,
}

impl From<&GuidanceTurn> for TurnResponse {
    fn from(turn: &GuidanceTurn) -> Self {
        let role = match turn.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            text: turn.text.clone(),
            at: turn.at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub turns: Vec<TurnResponse>,
}

/// Copilot reply plus the transcript length after the turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverseResponse {
    #[serde(flatten)]
    pub reply: CopilotResponse,
    pub turns: usize,
}

impl From<ConverseResult> for ConverseResponse {
    fn from(result: ConverseResult) -> Self {
        Self {
            reply: result.reply.into(),
            turns: result.turns,
        }
    }
}
