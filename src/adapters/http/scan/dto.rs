//! Response types for the image analysis endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::imaging::ImageClassification;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeImageResponse {
    pub candidates: Vec<CandidateResponse>,
    pub disclaimer: String,
}

impl From<ImageClassification> for AnalyzeImageResponse {
    fn from(classification: ImageClassification) -> Self {
        Self {
            candidates: classification
                .candidates
                .into_iter()
                .map(|c| CandidateResponse {
                    label: c.label,
                    confidence: c.confidence,
                })
                .collect(),
            disclaimer: classification.disclaimer,
        }
    }
}
