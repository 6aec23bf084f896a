use ndarray::Array2;

use crate::error::{RcasError, Result};
use crate::frame::{ColorFrame, Frame};

/// Split an interleaved RGB or RGBA buffer into separate planes.
///
/// `data` holds `channels` values per pixel, packed as [R, G, B, (A), ...] in
/// row-major order. A fourth channel becomes the alpha plane.
pub fn split_interleaved(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    bit_depth: u8,
) -> Result<ColorFrame> {
    if channels != 3 && channels != 4 {
        return Err(RcasError::UnsupportedChannelCount(channels));
    }
    let expected = width * height * channels;
    if data.len() != expected {
        return Err(RcasError::BufferSizeMismatch {
            expected,
            got: data.len(),
        });
    }

    let plane = |c: usize| {
        let plane = Array2::from_shape_fn((height, width), |(row, col)| {
            data[(row * width + col) * channels + c]
        });
        Frame::new(plane, bit_depth)
    };

    Ok(ColorFrame {
        red: plane(0),
        green: plane(1),
        blue: plane(2),
        alpha: (channels == 4).then(|| plane(3)),
    })
}

/// Merge planes into an interleaved buffer: RGBA when the frame carries
/// alpha, RGB otherwise.
pub fn merge_interleaved(color: &ColorFrame) -> Vec<f32> {
    let (h, w) = color.red.data.dim();
    let channels = if color.has_alpha() { 4 } else { 3 };
    let mut data = Vec::with_capacity(h * w * channels);

    for row in 0..h {
        for col in 0..w {
            data.push(color.red.data[[row, col]]);
            data.push(color.green.data[[row, col]]);
            data.push(color.blue.data[[row, col]]);
            if let Some(ref alpha) = color.alpha {
                data.push(alpha.data[[row, col]]);
            }
        }
    }

    data
}
