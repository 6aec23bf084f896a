use thiserror::Error;

#[derive(Error, Debug)]
pub enum RcasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Plane '{plane}' is {got_w}x{got_h}, expected {expected_w}x{expected_h}")]
    DimensionMismatch {
        plane: &'static str,
        expected_w: usize,
        expected_h: usize,
        got_w: usize,
        got_h: usize,
    },

    #[error("Buffer holds {got} values, expected {expected}")]
    BufferSizeMismatch { expected: usize, got: usize },

    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannelCount(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RcasError>;
