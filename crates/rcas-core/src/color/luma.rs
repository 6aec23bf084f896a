use serde::{Deserialize, Serialize};

use crate::color::sample::ColorSample;
use crate::consts::{GREEN_LUMA_SCALE, LUMA_WEIGHTS};

/// Formula used to turn a color sample into the luma proxy that drives
/// noise detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LumaMode {
    /// `dot(rgb, LUMA_WEIGHTS)`.
    #[default]
    WeightedDot,
    /// `2 * g`. Only selectable with extended features.
    GreenChannel,
}

impl std::fmt::Display for LumaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeightedDot => write!(f, "Weighted dot"),
            Self::GreenChannel => write!(f, "Green channel"),
        }
    }
}

/// Luma proxy of `rgb`, in "twice-luma" units. Callers must not renormalize.
#[inline]
pub fn luma(rgb: ColorSample, mode: LumaMode) -> f32 {
    match mode {
        LumaMode::WeightedDot => rgb.dot(LUMA_WEIGHTS),
        LumaMode::GreenChannel => rgb.g * GREEN_LUMA_SCALE,
    }
}
