//! Imaging handlers.

mod analyze_image;
mod scan_for_session;

pub use analyze_image::AnalyzeImageHandler;
pub use scan_for_session::{ScanForSessionCommand, ScanForSessionHandler};
