use opencv::core::Mat;
use opencv::prelude::*;
use opencv::{imgcodecs, imgproc};
use tracing::debug;

use crate::error::{MaskScanError, Result};

/// Global intensity threshold separating light mask fabric from skin tone.
/// Pixels strictly above it become white in the binary representation.
pub const BW_THRESHOLD: f64 = 80.0;

/// Decode a color image from disk.
pub fn load(path: &str) -> Result<Mat> {
    let image = imgcodecs::imread(path, imgcodecs::IMREAD_COLOR)?;
    if image.rows() == 0 || image.cols() == 0 {
        return Err(MaskScanError::ImageLoad(format!(
            "cannot decode image at: {}",
            path
        )));
    }
    debug!(path, rows = image.rows(), cols = image.cols(), "image loaded");
    Ok(image)
}

/// Derive the grayscale and binary representations of a color image.
///
/// Both outputs are computed once and never mutated afterward.
pub fn prepare(image: &Mat) -> Result<(Mat, Mat)> {
    if image.rows() == 0 || image.cols() == 0 {
        return Err(MaskScanError::ImageLoad(
            "empty pixel grid".to_string(),
        ));
    }
    let gray = to_grayscale(image)?;
    let binary = binarize(&gray)?;
    Ok((gray, binary))
}

fn to_grayscale(image: &Mat) -> Result<Mat> {
    let mut gray = Mat::default();
    imgproc::cvt_color(image, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;
    Ok(gray)
}

fn binarize(gray: &Mat) -> Result<Mat> {
    let mut binary = Mat::default();
    imgproc::threshold(
        gray,
        &mut binary,
        BW_THRESHOLD,
        255.0,
        imgproc::THRESH_BINARY,
    )?;
    Ok(binary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{Scalar, CV_8UC3};

    fn flat_color(rows: i32, cols: i32, value: f64) -> Mat {
        Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, Scalar::all(value)).unwrap()
    }

    #[test]
    fn test_threshold_boundary_maps_80_to_black() {
        let gray = Mat::from_slice_2d(&[[79u8, 80u8, 81u8]]).unwrap();
        let binary = binarize(&gray).unwrap();
        assert_eq!(*binary.at_2d::<u8>(0, 0).unwrap(), 0);
        assert_eq!(*binary.at_2d::<u8>(0, 1).unwrap(), 0);
        assert_eq!(*binary.at_2d::<u8>(0, 2).unwrap(), 255);
    }

    #[test]
    fn test_prepare_preserves_dimensions() {
        let image = flat_color(48, 64, 128.0);
        let (gray, binary) = prepare(&image).unwrap();
        assert_eq!((gray.rows(), gray.cols()), (48, 64));
        assert_eq!((binary.rows(), binary.cols()), (48, 64));
    }

    #[test]
    fn test_dark_image_binarizes_to_all_black() {
        let (_, binary) = prepare(&flat_color(8, 8, 40.0)).unwrap();
        let total = opencv::core::sum_elems(&binary).unwrap();
        assert_eq!(total[0], 0.0);
    }

    #[test]
    fn test_bright_image_binarizes_to_all_white() {
        let (_, binary) = prepare(&flat_color(8, 8, 200.0)).unwrap();
        let total = opencv::core::sum_elems(&binary).unwrap();
        assert_eq!(total[0], 255.0 * 64.0);
    }

    #[test]
    fn test_load_missing_file_is_image_load_error() {
        let err = load("no/such/image.jpg").unwrap_err();
        assert!(matches!(err, MaskScanError::ImageLoad(_)));
    }

    #[test]
    fn test_prepare_rejects_empty_grid() {
        let err = prepare(&Mat::default()).unwrap_err();
        assert!(matches!(err, MaskScanError::ImageLoad(_)));
    }
}
