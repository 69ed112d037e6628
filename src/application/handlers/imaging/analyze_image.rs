//! AnalyzeImageHandler - forwards an upload to the image classifier.
//!
//! Classification is advisory only and never feeds the risk score.

use std::sync::Arc;

use crate::domain::imaging::{ImageClassification, ImageUpload};
use crate::ports::ImageCategorySource;

use super::super::ScreeningError;

pub struct AnalyzeImageHandler {
    source: Arc<dyn ImageCategorySource>,
}

impl AnalyzeImageHandler {
    pub fn new(source: Arc<dyn ImageCategorySource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, upload: ImageUpload) -> Result<ImageClassification, ScreeningError> {
        let classification = self.source.classify(&upload).await.map_err(|e| {
            tracing::error!(error = %e, bytes = upload.byte_len(), "Image classification failed");
            ScreeningError::from(e)
        })?;

        if let Some(top) = classification.top() {
            tracing::info!(
                label = %top.label,
                confidence = top.confidence,
                "Image classified"
            );
        }

        Ok(classification)
    }
}
