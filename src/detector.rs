use std::path::Path;

use opencv::core::{Mat, Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use tracing::debug;

use crate::error::{MaskScanError, Result};

/// Pretrained cascade model consumed by the face detector.
pub const FACE_CASCADE_PATH: &str = "data/haarcascade_frontalface_default.xml";
/// Pretrained cascade model consumed by the mouth detector.
pub const MOUTH_CASCADE_PATH: &str = "data/haarcascade_mcs_mouth.xml";

/// Axis-aligned detection rectangle in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<Rect> for DetectionBox {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Locates instances of one object class in an image representation.
///
/// Takes `&mut self` because the cascade backend's scan is a non-const
/// operation; calls carry no observable state between invocations.
pub trait Detector {
    fn detect(&mut self, image: &Mat) -> Result<Vec<DetectionBox>>;
}

/// Detector backed by an OpenCV cascade classifier loaded from disk.
pub struct CascadeDetector {
    classifier: CascadeClassifier,
    scale_factor: f64,
    min_neighbors: i32,
}

impl CascadeDetector {
    pub fn from_file(model_path: &str, scale_factor: f64, min_neighbors: i32) -> Result<Self> {
        if !Path::new(model_path).exists() {
            return Err(MaskScanError::ModelLoad(format!(
                "cascade model not found at: {}",
                model_path
            )));
        }

        let classifier = CascadeClassifier::new(model_path).map_err(|e| {
            MaskScanError::ModelLoad(format!("cannot read cascade model {}: {}", model_path, e))
        })?;

        Ok(Self {
            classifier,
            scale_factor,
            min_neighbors,
        })
    }

    /// Frontal face detector (scale factor 1.3, minimum 5 neighbors).
    pub fn face() -> Result<Self> {
        Self::from_file(FACE_CASCADE_PATH, 1.3, 5)
    }

    /// Mouth detector (scale factor 1.5, minimum 5 neighbors).
    pub fn mouth() -> Result<Self> {
        Self::from_file(MOUTH_CASCADE_PATH, 1.5, 5)
    }
}

impl Detector for CascadeDetector {
    fn detect(&mut self, image: &Mat) -> Result<Vec<DetectionBox>> {
        let mut objects = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            image,
            &mut objects,
            self.scale_factor,
            self.min_neighbors,
            0,
            Size::new(0, 0),
            Size::new(0, 0),
        )?;
        debug!(count = objects.len(), "cascade pass complete");
        Ok(objects.iter().map(DetectionBox::from).collect())
    }
}
