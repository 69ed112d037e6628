//! TriageSnapshot - key-value textual form of a triage outcome.
//!
//! Browser clients keep the result, the answers and the photo candidates as
//! JSON strings under fixed keys. This module produces and reads exactly that
//! shape so the storage medium stays the caller's concern.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::imaging::ImageCandidate;

use super::answers::AnswerSet;
use super::risk::RiskAssessment;
use super::session::TriageSession;

/// Key holding the serialized [`RiskAssessment`].
pub const RESULT_KEY: &str = "derma_ai_result";

/// Key holding the serialized [`AnswerSet`].
pub const ANSWERS_KEY: &str = "derma_ai_answers";

/// Key holding the candidates of the session's photo scan.
pub const IMAGE_CANDIDATES_KEY: &str = "derma_ai_image_candidates";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed value under '{key}': {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Client-held view of a session: the result, if any, plus the answers and
/// any scanned photo candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriageSnapshot {
    pub result: Option<RiskAssessment>,
    pub answers: AnswerSet,
    pub image_candidates: Option<Vec<ImageCandidate>>,
}

impl TriageSnapshot {
    pub fn from_session(session: &TriageSession) -> Self {
        Self {
            result: session.assessment().cloned(),
            answers: session.answers().clone(),
            image_candidates: None,
        }
    }

    pub fn with_image_candidates(mut self, candidates: Option<Vec<ImageCandidate>>) -> Self {
        self.image_candidates = candidates;
        self
    }

    /// Encodes to key-value pairs. The result key is omitted until scored and
    /// the candidates key until a photo was scanned.
    pub fn to_entries(&self) -> Result<BTreeMap<String, String>, SnapshotError> {
        let mut entries = BTreeMap::new();

        if let Some(result) = &self.result {
            let value = serde_json::to_string(result).map_err(|source| SnapshotError::Encode {
                key: RESULT_KEY,
                source,
            })?;
            entries.insert(RESULT_KEY.to_string(), value);
        }

        let answers = serde_json::to_string(&self.answers).map_err(|source| SnapshotError::Encode {
            key: ANSWERS_KEY,
            source,
        })?;
        entries.insert(ANSWERS_KEY.to_string(), answers);

        if let Some(candidates) = &self.image_candidates {
            let value = serde_json::to_string(candidates).map_err(|source| SnapshotError::Encode {
                key: IMAGE_CANDIDATES_KEY,
                source,
            })?;
            entries.insert(IMAGE_CANDIDATES_KEY.to_string(), value);
        }

        Ok(entries)
    }

    /// Decodes from key-value pairs. Absent keys mean no result, no answers
    /// and no scan.
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Result<Self, SnapshotError> {
        let result = entries
            .get(RESULT_KEY)
            .map(|raw| serde_json::from_str::<RiskAssessment>(raw))
            .transpose()
            .map_err(|source| SnapshotError::Malformed {
                key: RESULT_KEY,
                source,
            })?;

        let answers = entries
            .get(ANSWERS_KEY)
            .map(|raw| serde_json::from_str::<AnswerSet>(raw))
            .transpose()
            .map_err(|source| SnapshotError::Malformed {
                key: ANSWERS_KEY,
                source,
            })?
            .unwrap_or_default();

        let image_candidates = entries
            .get(IMAGE_CANDIDATES_KEY)
            .map(|raw| serde_json::from_str::<Vec<ImageCandidate>>(raw))
            .transpose()
            .map_err(|source| SnapshotError::Malformed {
                key: IMAGE_CANDIDATES_KEY,
                source,
            })?;

        Ok(Self {
            result,
            answers,
            image_candidates,
        })
    }
}
