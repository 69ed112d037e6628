//! Image Category Source Port - pluggable photo classifier.
//!
//! The screening flow treats classification as an external collaborator:
//! one operation in, a ranked candidate list out.

use async_trait::async_trait;

use crate::domain::imaging::{ImageClassification, ImageUpload};

/// Errors raised by an image classifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageSourceError {
    #[error("Image classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Unsupported image: {0}")]
    Unsupported(String),
}

/// Port for classifying a skin photo into candidate categories.
#[async_trait]
pub trait ImageCategorySource: Send + Sync {
    /// Classify an uploaded image.
    ///
    /// # Returns
    /// Candidates ranked by descending confidence, with a disclaimer
    ///
    /// # Errors
    /// Returns `ImageSourceError` if the classifier cannot process the upload
    async fn classify(&self, upload: &ImageUpload) -> Result<ImageClassification, ImageSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_source_error_messages() {
        let err = ImageSourceError::Unavailable("model offline".to_string());
        assert_eq!(err.to_string(), "Image classifier unavailable: model offline");

        let err = ImageSourceError::Unsupported("image/tiff".to_string());
        assert!(err.to_string().contains("image/tiff"));
    }
}
