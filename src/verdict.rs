use opencv::core::{Mat, Scalar};
use opencv::prelude::*;
use tracing::{debug, info};

use crate::detector::Detector;
use crate::error::{MaskScanError, Result};

/// Classification outcome for a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoFaceDetected,
    MaskWorn,
    MaskNotWorn,
}

impl Verdict {
    /// Display label drawn on the image and printed for the operator.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::NoFaceDetected => "No face detected",
            Verdict::MaskWorn => "Wearing Mask",
            Verdict::MaskNotWorn => "Not Wearing Mask",
        }
    }

    /// Annotation color (BGR) for the label.
    pub fn color(self) -> Scalar {
        match self {
            Verdict::MaskNotWorn => Scalar::new(255.0, 255.0, 0.0, 0.0),
            Verdict::MaskWorn | Verdict::NoFaceDetected => {
                Scalar::new(255.0, 255.0, 100.0, 0.0)
            }
        }
    }
}

/// Resolve a verdict from the two image representations.
///
/// The branches form an ordered decision tree; the first match wins. The
/// mouth detector runs only when the grayscale pass finds a face, and at
/// most once per invocation.
pub fn resolve(
    face: &mut dyn Detector,
    mouth: &mut dyn Detector,
    gray: &Mat,
    binary: &Mat,
) -> Result<(Verdict, &'static str)> {
    if gray.size()? != binary.size()? {
        return Err(MaskScanError::InvalidState(format!(
            "grayscale {}x{} and binary {}x{} representations differ in size",
            gray.cols(),
            gray.rows(),
            binary.cols(),
            binary.rows()
        )));
    }

    let faces_gray = face.detect(gray)?;
    let faces_binary = face.detect(binary)?;
    debug!(
        gray = faces_gray.len(),
        binary = faces_binary.len(),
        "face passes complete"
    );

    let verdict = if faces_gray.is_empty() && faces_binary.is_empty() {
        Verdict::NoFaceDetected
    } else if faces_gray.is_empty() {
        // A light mask covering the mouth suppresses grayscale face
        // detection while the binarized region stays detectable. Reaching
        // this branch means faces_binary is non-empty, so no further
        // check is needed.
        Verdict::MaskWorn
    } else if mouth.detect(gray)?.is_empty() {
        // Face visible but no mouth region: occluded.
        Verdict::MaskWorn
    } else {
        Verdict::MaskNotWorn
    };

    let label = verdict.label();
    info!(%label, "classification complete");
    Ok((verdict, label))
}
