//! GetResultHandler - Query handler for the results page.
//!
//! Pairs the assessment with the fixed next-steps panel for its tier.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::guidance::next_steps;
use crate::domain::triage::RiskAssessment;
use crate::ports::TriageSessionStore;

use super::super::ScreeningError;

#[derive(Debug, Clone, Copy)]
pub struct GetResultQuery {
    pub session_id: SessionId,
}

/// Everything the results page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageResultView {
    pub session_id: SessionId,
    pub assessment: RiskAssessment,
    pub next_steps: &'static [&'static str; 3],
}

pub struct GetResultHandler {
    store: Arc<dyn TriageSessionStore>,
}

impl GetResultHandler {
    pub fn new(store: Arc<dyn TriageSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetResultQuery) -> Result<TriageResultView, ScreeningError> {
        let record = self.store.load(query.session_id).await?;
        let session = &record.session;

        let Some(assessment) = session.assessment().cloned() else {
            let (answered, total) = session.progress();
            return Err(ScreeningError::Incomplete { answered, total });
        };

        Ok(TriageResultView {
            session_id: record.id,
            next_steps: next_steps(assessment.tier()),
            assessment,
        })
    }
}
