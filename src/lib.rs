// Core modules
pub mod detector;
pub mod error;
pub mod preprocess;
pub mod render;
pub mod verdict;

// Re-export commonly used types
pub use detector::{CascadeDetector, DetectionBox, Detector};
pub use error::{MaskScanError, Result};
pub use preprocess::{load, prepare, BW_THRESHOLD};
pub use verdict::{resolve, Verdict};
