//! Imaging module - value types exchanged with image classifiers.
//!
//! Classification itself lives behind the `ImageCategorySource` port; the
//! screening logic never depends on its output.

use serde::{Deserialize, Serialize};

/// Disclaimer attached to every classification.
pub const IMAGE_DISCLAIMER: &str = "This is not a diagnosis. It is an AI-assisted risk screening and should not replace professional medical advice.";

/// A photo submitted for classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(content_type: Option<String>, data: Vec<u8>) -> Self {
        Self { content_type, data }
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// One label with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCandidate {
    pub label: String,
    pub confidence: f32,
}

impl ImageCandidate {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

/// Ranked candidates plus the disclaimer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageClassification {
    pub candidates: Vec<ImageCandidate>,
    pub disclaimer: String,
}

impl ImageClassification {
    /// Builds a classification with candidates sorted by descending confidence.
    pub fn ranked(mut candidates: Vec<ImageCandidate>) -> Self {
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self {
            candidates,
            disclaimer: IMAGE_DISCLAIMER.to_string(),
        }
    }

    /// The most likely candidate.
    pub fn top(&self) -> Option<&ImageCandidate> {
        self.candidates.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_sorts_descending() {
        let result = ImageClassification::ranked(vec![
            ImageCandidate::new("Acne-like", 0.10),
            ImageCandidate::new("Dermatitis / Eczema-like", 0.72),
            ImageCandidate::new("Fungal-like rash", 0.18),
        ]);

        let labels: Vec<_> = result.candidates.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Dermatitis / Eczema-like", "Fungal-like rash", "Acne-like"]);
        assert_eq!(result.top().unwrap().label, "Dermatitis / Eczema-like");
        assert_eq!(result.disclaimer, IMAGE_DISCLAIMER);
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(ImageCandidate::new("x", 1.4).confidence, 1.0);
        assert_eq!(ImageCandidate::new("x", -0.2).confidence, 0.0);
    }

    #[test]
    fn empty_classification_has_no_top() {
        assert!(ImageClassification::ranked(vec![]).top().is_none());
    }
}
