use ndarray::Array2;
use std::path::PathBuf;

use crate::error::{RcasError, Result};

/// A single image plane.
/// Pixel values are f32, nominally in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Original bit depth before conversion (8 or 16)
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Color image composed of separate channel planes.
///
/// `alpha` is never read by the sharpening kernel; it is only carried.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
    pub alpha: Option<Frame>,
}

impl ColorFrame {
    /// Build an RGB frame without alpha.
    pub fn rgb(red: Frame, green: Frame, blue: Frame) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Build a gray color frame by replicating one plane into R, G and B.
    pub fn from_mono(frame: &Frame) -> Self {
        Self::rgb(frame.clone(), frame.clone(), frame.clone())
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Check that every plane has the dimensions of the red plane and that
    /// the image is not empty.
    pub fn validate(&self) -> Result<()> {
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return Err(RcasError::InvalidDimensions {
                width: w,
                height: h,
            });
        }

        let planes = [
            ("green", Some(&self.green)),
            ("blue", Some(&self.blue)),
            ("alpha", self.alpha.as_ref()),
        ];
        for (name, plane) in planes {
            if let Some(p) = plane {
                if p.width() != w || p.height() != h {
                    return Err(RcasError::DimensionMismatch {
                        plane: name,
                        expected_w: w,
                        expected_h: h,
                        got_w: p.width(),
                        got_h: p.height(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Channel layout of an image file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorType {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl ColorType {
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::GrayAlpha | Self::Rgba)
    }
}

impl std::fmt::Display for ColorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray => write!(f, "Gray"),
            Self::GrayAlpha => write!(f, "Gray + Alpha"),
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}

/// Metadata about a source image file.
#[derive(Clone, Debug)]
pub struct ImageInfo {
    pub filename: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
}
