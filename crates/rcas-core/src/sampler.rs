//! Neighbor sampling for the sharpening kernel.
//!
//! The kernel never touches image storage directly. It asks a
//! [`NeighborSampler`] for the center pixel and its four axis neighbors, so
//! any image model (planar frames, interleaved buffers, tiles) can feed it.

use serde::{Deserialize, Serialize};

use crate::color::ColorSample;
use crate::frame::{ColorFrame, Frame};

/// Policy resolving neighbor coordinates that fall outside the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderMode {
    /// Clamp to the nearest edge pixel.
    #[default]
    Clamp,
    /// Reflect about the edge pixel (-1 maps to 1).
    Mirror,
    /// Periodic: -1 maps to size - 1.
    Wrap,
}

impl BorderMode {
    /// Map a possibly out-of-range index into `[0, size)`.
    pub fn resolve(self, idx: isize, size: usize) -> usize {
        if size <= 1 {
            return 0;
        }
        match self {
            Self::Clamp => idx.clamp(0, size as isize - 1) as usize,
            Self::Mirror => mirror_index(idx, size),
            Self::Wrap => idx.rem_euclid(size as isize) as usize,
        }
    }
}

impl std::fmt::Display for BorderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "Clamp"),
            Self::Mirror => write!(f, "Mirror"),
            Self::Wrap => write!(f, "Wrap"),
        }
    }
}

/// Mirror boundary handling: reflect index into [0, size).
/// Even function (f(-k) = f(k)) with period 2*size - 2, so the edge pixel is
/// not repeated.
fn mirror_index(idx: isize, size: usize) -> usize {
    let period = 2 * (size - 1);
    let m = idx.unsigned_abs() % period;

    if m < size {
        m
    } else {
        period - m
    }
}

/// Source of color samples at integer offsets from a pixel.
///
/// Implementations must be safe to share across threads: the image-level
/// driver calls `sample` from many rows at once.
pub trait NeighborSampler: Sync {
    /// Image dimensions as (width, height).
    fn dimensions(&self) -> (usize, usize);

    /// Color at `(x + dx, y + dy)`, with out-of-range coordinates resolved by
    /// the sampler's border policy.
    fn sample(&self, x: usize, y: usize, dx: isize, dy: isize) -> ColorSample;

    /// Alpha at `(x, y)`, if the source has an alpha channel.
    fn alpha(&self, _x: usize, _y: usize) -> Option<f32> {
        None
    }
}

/// The five taps read by the kernel.
///
/// ```text
///     b
///   d e f
///     h
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighborhood {
    pub b: ColorSample,
    pub d: ColorSample,
    pub e: ColorSample,
    pub f: ColorSample,
    pub h: ColorSample,
}

impl Neighborhood {
    /// Fetch the cross-shaped neighborhood around `(x, y)`.
    #[inline]
    pub fn gather<S: NeighborSampler + ?Sized>(sampler: &S, x: usize, y: usize) -> Self {
        Self {
            b: sampler.sample(x, y, 0, -1),
            d: sampler.sample(x, y, -1, 0),
            e: sampler.sample(x, y, 0, 0),
            f: sampler.sample(x, y, 1, 0),
            h: sampler.sample(x, y, 0, 1),
        }
    }

    /// Neighborhood where all five taps share one color.
    pub fn uniform(c: ColorSample) -> Self {
        Self {
            b: c,
            d: c,
            e: c,
            f: c,
            h: c,
        }
    }

    /// The four ring samples (up, left, right, down).
    pub fn ring(&self) -> [ColorSample; 4] {
        [self.b, self.d, self.f, self.h]
    }

    /// True when all five taps are bit-identical.
    pub fn is_uniform(&self) -> bool {
        self.ring().iter().all(|&c| c == self.e)
    }
}

/// Sampler over an in-memory [`ColorFrame`].
pub struct FrameSampler<'a> {
    frame: &'a ColorFrame,
    border: BorderMode,
}

impl<'a> FrameSampler<'a> {
    pub fn new(frame: &'a ColorFrame, border: BorderMode) -> Self {
        Self { frame, border }
    }
}

impl NeighborSampler for FrameSampler<'_> {
    fn dimensions(&self) -> (usize, usize) {
        (self.frame.width(), self.frame.height())
    }

    #[inline]
    fn sample(&self, x: usize, y: usize, dx: isize, dy: isize) -> ColorSample {
        let col = self.border.resolve(x as isize + dx, self.frame.width());
        let row = self.border.resolve(y as isize + dy, self.frame.height());
        ColorSample::new(
            self.frame.red.data[[row, col]],
            self.frame.green.data[[row, col]],
            self.frame.blue.data[[row, col]],
        )
    }

    fn alpha(&self, x: usize, y: usize) -> Option<f32> {
        self.frame.alpha.as_ref().map(|a| a.data[[y, x]])
    }
}

/// Sampler over a single plane, read as a gray color (R = G = B).
pub struct PlaneSampler<'a> {
    frame: &'a Frame,
    border: BorderMode,
}

impl<'a> PlaneSampler<'a> {
    pub fn new(frame: &'a Frame, border: BorderMode) -> Self {
        Self { frame, border }
    }
}

impl NeighborSampler for PlaneSampler<'_> {
    fn dimensions(&self) -> (usize, usize) {
        (self.frame.width(), self.frame.height())
    }

    #[inline]
    fn sample(&self, x: usize, y: usize, dx: isize, dy: isize) -> ColorSample {
        let col = self.border.resolve(x as isize + dx, self.frame.width());
        let row = self.border.resolve(y as isize + dy, self.frame.height());
        ColorSample::splat(self.frame.data[[row, col]])
    }
}
