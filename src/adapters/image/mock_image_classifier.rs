//! Mock Image Classifier.
//!
//! Stands in for a real skin-photo model. Every upload gets the same three
//! candidates, so the results page can be exercised end to end without a
//! model behind it.
//!
//! # Example
//!
//! ```ignore
//! let classifier = MockImageClassifier::new()
//!     .with_delay(Duration::from_millis(1200));
//!
//! let result = classifier.classify(&upload).await?;
//! assert_eq!(result.top().unwrap().label, "Dermatitis / Eczema-like");
//! ```

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::imaging::{ImageCandidate, ImageClassification, ImageUpload};
use crate::ports::{ImageCategorySource, ImageSourceError};

/// Candidates returned for every upload.
pub const MOCK_CANDIDATES: [(&str, f32); 3] = [
    ("Dermatitis / Eczema-like", 0.72),
    ("Fungal-like rash", 0.18),
    ("Acne-like", 0.10),
];

/// Mock classifier with configurable latency and failure injection.
#[derive(Debug, Clone, Default)]
pub struct MockImageClassifier {
    /// Simulated latency per request.
    delay: Duration,
    /// When set, every call fails with this error.
    failure: Option<ImageSourceError>,
    /// Number of classify calls, shared across clones.
    calls: Arc<AtomicUsize>,
}

impl MockImageClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes every call fail with `error`.
    pub fn with_failure(mut self, error: ImageSourceError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the number of calls made to this classifier.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageCategorySource for MockImageClassifier {
    async fn classify(&self, upload: &ImageUpload) -> Result<ImageClassification, ImageSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        tracing::debug!(
            bytes = upload.byte_len(),
            content_type = upload.content_type.as_deref().unwrap_or("unknown"),
            "Classifying upload with mock classifier"
        );

        let candidates = MOCK_CANDIDATES
            .iter()
            .map(|(label, confidence)| ImageCandidate::new(*label, *confidence))
            .collect();

        Ok(ImageClassification::ranked(candidates))
    }
}
