use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskScanError {
    #[error("Image load error: {0}")]
    ImageLoad(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),
}

pub type Result<T> = std::result::Result<T, MaskScanError>;
