//! Image Classifier Adapters
//!
//! Implementations of the `ImageCategorySource` port.
//!
//! - **MockImageClassifier** - Fixed candidate list with optional latency

mod mock_image_classifier;

pub use mock_image_classifier::MockImageClassifier;
