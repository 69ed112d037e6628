//! Shared state for the screening API.

use std::sync::Arc;
use std::time::Duration;

use crate::application::{
    AnalyzeImageHandler, AskCopilotHandler, ConverseHandler, GetResultHandler,
    GetSnapshotHandler, GetTranscriptHandler, GetTriageHandler, StartTriageHandler,
    ScanForSessionHandler, SessionLocks, SubmitAnswerHandler,
};
use crate::ports::{ImageCategorySource, TriageSessionStore};

/// Ports and settings every endpoint group draws its handlers from.
#[derive(Clone)]
pub struct ScreeningAppState {
    pub session_store: Arc<dyn TriageSessionStore>,
    pub image_source: Arc<dyn ImageCategorySource>,
    /// Serializes commands on the same session across requests
    pub session_locks: SessionLocks,
    /// Simulated thinking time for copilot replies
    pub copilot_delay: Duration,
}

impl ScreeningAppState {
    pub fn new(
        session_store: Arc<dyn TriageSessionStore>,
        image_source: Arc<dyn ImageCategorySource>,
    ) -> Self {
        Self {
            session_store,
            image_source,
            session_locks: SessionLocks::new(),
            copilot_delay: Duration::ZERO,
        }
    }

    pub fn with_copilot_delay(mut self, delay: Duration) -> Self {
        self.copilot_delay = delay;
        self
    }

    pub fn start_triage_handler(&self) -> StartTriageHandler {
        StartTriageHandler::new(self.session_store.clone())
    }

    pub fn submit_answer_handler(&self) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(self.session_store.clone(), self.session_locks.clone())
    }

    pub fn get_triage_handler(&self) -> GetTriageHandler {
        GetTriageHandler::new(self.session_store.clone())
    }

    pub fn get_result_handler(&self) -> GetResultHandler {
        GetResultHandler::new(self.session_store.clone())
    }

    pub fn get_snapshot_handler(&self) -> GetSnapshotHandler {
        GetSnapshotHandler::new(self.session_store.clone())
    }

    pub fn ask_copilot_handler(&self) -> AskCopilotHandler {
        AskCopilotHandler::new().with_delay(self.copilot_delay)
    }

    pub fn converse_handler(&self) -> ConverseHandler {
        ConverseHandler::new(self.session_store.clone(), self.session_locks.clone())
            .with_delay(self.copilot_delay)
    }

    pub fn get_transcript_handler(&self) -> GetTranscriptHandler {
        GetTranscriptHandler::new(self.session_store.clone())
    }

    pub fn analyze_image_handler(&self) -> AnalyzeImageHandler {
        AnalyzeImageHandler::new(self.image_source.clone())
    }

    pub fn scan_for_session_handler(&self) -> ScanForSessionHandler {
        ScanForSessionHandler::new(
            self.image_source.clone(),
            self.session_store.clone(),
            self.session_locks.clone(),
        )
    }
}
