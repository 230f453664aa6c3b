use opencv::core::{Mat, Point, Scalar};
use opencv::{highgui, imgproc};

use crate::error::Result;

const WINDOW_NAME: &str = "Mask Detection";
const LABEL_ORIGIN: (i32, i32) = (25, 25);
const FONT_SCALE: f64 = 0.8;
const THICKNESS: i32 = 2;

/// Draw the verdict label onto the color image.
pub fn annotate(image: &mut Mat, label: &str, color: Scalar) -> Result<()> {
    imgproc::put_text(
        image,
        label,
        Point::new(LABEL_ORIGIN.0, LABEL_ORIGIN.1),
        imgproc::FONT_HERSHEY_SIMPLEX,
        FONT_SCALE,
        color,
        THICKNESS,
        imgproc::LINE_AA,
        false,
    )?;
    Ok(())
}

/// Show the annotated image in a modal window until any key is pressed.
pub fn show(image: &Mat) -> Result<()> {
    highgui::imshow(WINDOW_NAME, image)?;
    highgui::wait_key(0)?;
    highgui::destroy_all_windows()?;
    Ok(())
}
