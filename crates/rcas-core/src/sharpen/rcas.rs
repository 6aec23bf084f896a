use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::color::process::{merge_interleaved, split_interleaved};
use crate::color::{luma, ColorSample};
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{RcasError, Result};
use crate::frame::{ColorFrame, Frame};
use crate::sampler::{BorderMode, FrameSampler, NeighborSampler, Neighborhood, PlaneSampler};

use super::lobe::{limit_lobe, solve_lobe};
use super::noise::noise_confidence;
use super::params::RcasParams;

/// Noise confidence for a neighborhood, or 1.0 when denoising is off.
pub fn confidence(n: &Neighborhood, params: &RcasParams) -> f32 {
    if !params.denoise() {
        return 1.0;
    }
    let mode = params.luma_mode();
    noise_confidence(
        luma(n.b, mode),
        luma(n.d, mode),
        luma(n.e, mode),
        luma(n.f, mode),
        luma(n.h, mode),
    )
}

/// Final lobe weight for a neighborhood: solved, limited, scaled by
/// sharpness and attenuated by noise confidence. Always in
/// `[-limit * sharpness, 0]`.
pub fn lobe_weight(n: &Neighborhood, params: &RcasParams) -> f32 {
    let lobe = limit_lobe(solve_lobe(&n.ring()), params.limit(), params.sharpness());
    if params.denoise() {
        lobe * confidence(n, params)
    } else {
        lobe
    }
}

/// Blend the ring into the center with weight `lobe`.
///
/// The normalization uses a full-precision divide; an approximate reciprocal
/// visibly shifts tonality.
#[inline]
pub fn resolve(n: &Neighborhood, lobe: f32) -> ColorSample {
    let rcp_denom = 1.0 / (4.0 * lobe + 1.0);
    let ring_sum = n.b + n.d + n.f + n.h;
    (ring_sum * lobe + n.e) * rcp_denom
}

/// Sharpen one pixel.
///
/// A uniform neighborhood returns the center untouched, and so does any
/// neighborhood whose result is not finite.
pub fn rcas_pixel(n: &Neighborhood, params: &RcasParams) -> ColorSample {
    if n.is_uniform() {
        return n.e;
    }
    let out = resolve(n, lobe_weight(n, params));
    if out.is_finite() {
        out
    } else {
        n.e
    }
}

/// Sharpen every pixel reachable through `sampler` into a new frame.
///
/// The output alpha plane is present only when pass-through is enabled and
/// the sampler provides alpha. Rows are processed in parallel for large
/// images; both paths produce identical results.
pub fn sharpen_with<S: NeighborSampler + ?Sized>(
    sampler: &S,
    params: &RcasParams,
    bit_depth: u8,
) -> ColorFrame {
    let (w, h) = sampler.dimensions();
    let carry_alpha =
        params.passthrough_alpha() && w > 0 && h > 0 && sampler.alpha(0, 0).is_some();

    let process_row = |row: usize| -> Vec<(ColorSample, f32)> {
        (0..w)
            .map(|col| {
                let n = Neighborhood::gather(sampler, col, row);
                let alpha = if carry_alpha {
                    sampler.alpha(col, row).unwrap_or(1.0)
                } else {
                    1.0
                };
                (rcas_pixel(&n, params), alpha)
            })
            .collect()
    };

    let rows: Vec<Vec<(ColorSample, f32)>> = if w * h >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(process_row).collect()
    } else {
        (0..h).map(process_row).collect()
    };

    let mut red = Array2::<f32>::zeros((h, w));
    let mut green = Array2::<f32>::zeros((h, w));
    let mut blue = Array2::<f32>::zeros((h, w));
    let mut alpha = carry_alpha.then(|| Array2::<f32>::zeros((h, w)));

    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, (c, a)) in row_data.into_iter().enumerate() {
            red[[row, col]] = c.r;
            green[[row, col]] = c.g;
            blue[[row, col]] = c.b;
            if let Some(ref mut alpha) = alpha {
                alpha[[row, col]] = a;
            }
        }
    }

    ColorFrame {
        red: Frame::new(red, bit_depth),
        green: Frame::new(green, bit_depth),
        blue: Frame::new(blue, bit_depth),
        alpha: alpha.map(|a| Frame::new(a, bit_depth)),
    }
}

/// Sharpen a color frame into a new frame of the same dimensions.
pub fn sharpen(color: &ColorFrame, params: &RcasParams, border: BorderMode) -> Result<ColorFrame> {
    color.validate()?;
    debug!(
        width = color.width(),
        height = color.height(),
        sharpness = params.sharpness(),
        limit = params.limit(),
        denoise = params.denoise(),
        %border,
        "RCAS sharpen"
    );
    let sampler = FrameSampler::new(color, border);
    Ok(sharpen_with(&sampler, params, color.red.original_bit_depth))
}

/// Sharpen a single-plane frame, treating it as gray (R = G = B).
pub fn sharpen_mono(frame: &Frame, params: &RcasParams, border: BorderMode) -> Result<Frame> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(RcasError::InvalidDimensions {
            width: frame.width(),
            height: frame.height(),
        });
    }
    let sampler = PlaneSampler::new(frame, border);
    let out = sharpen_with(&sampler, params, frame.original_bit_depth);
    Ok(out.green)
}

/// Sharpen an interleaved RGB or RGBA buffer.
///
/// The result is RGBA when the input has four channels and alpha
/// pass-through is enabled, RGB otherwise.
pub fn sharpen_interleaved(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    params: &RcasParams,
    border: BorderMode,
) -> Result<Vec<f32>> {
    let color = split_interleaved(data, width, height, channels, 16)?;
    let sharpened = sharpen(&color, params, border)?;
    Ok(merge_interleaved(&sharpened))
}
