use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::LumaMode;
use crate::consts::{DEFAULT_SHARPNESS, EXTENDED_MAX_SHARPNESS, RCAS_LIMIT, STANDARD_MAX_SHARPNESS};
use crate::error::{RcasError, Result};
use crate::sampler::BorderMode;

/// User-facing sharpening options, as read from a config file or the CLI.
///
/// Values are not trusted: [`RcasConfig::resolve`] clamps them to the ranges
/// of the selected mode before they reach the kernel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcasConfig {
    /// Lobe multiplier, [0, 1.0] (standard) or [0, 1.3] (extended).
    ///
    /// Above 1.0 the lobe can exceed `limit`: at limit 0.1875 and sharpness
    /// 1.3 the resolve denominator drops to 0.025, so overshoot on isolated
    /// peaks is amplified up to 40x.
    pub sharpness: f32,
    /// Ceiling on the lobe magnitude. Only honored in extended mode.
    pub limit: f32,
    /// Attenuate sharpening where the neighborhood looks like noise.
    pub denoise: bool,
    /// Copy the center alpha into the output.
    pub passthrough_alpha: bool,
    /// Luma formula for noise detection. `GreenChannel` requires `extended`.
    pub luma_mode: LumaMode,
    /// Unlock the wider sharpness/limit ranges and green-channel luma.
    pub extended: bool,
    /// How neighbors outside the image are sampled.
    pub border: BorderMode,
}

impl Default for RcasConfig {
    fn default() -> Self {
        Self {
            sharpness: DEFAULT_SHARPNESS,
            limit: RCAS_LIMIT,
            denoise: true,
            passthrough_alpha: false,
            luma_mode: LumaMode::WeightedDot,
            extended: false,
            border: BorderMode::Clamp,
        }
    }
}

impl RcasConfig {
    /// Largest sharpness accepted in the configured mode.
    pub fn max_sharpness(&self) -> f32 {
        if self.extended {
            EXTENDED_MAX_SHARPNESS
        } else {
            STANDARD_MAX_SHARPNESS
        }
    }

    /// Validate and clamp into kernel parameters.
    ///
    /// Non-finite numbers are rejected. Out-of-range values and extended-only
    /// options used in standard mode are clamped with a warning.
    pub fn resolve(&self) -> Result<RcasParams> {
        if !self.sharpness.is_finite() {
            return Err(RcasError::InvalidConfig(format!(
                "sharpness must be finite, got {}",
                self.sharpness
            )));
        }
        if !self.limit.is_finite() {
            return Err(RcasError::InvalidConfig(format!(
                "limit must be finite, got {}",
                self.limit
            )));
        }

        let max_sharpness = self.max_sharpness();
        let sharpness = self.sharpness.clamp(0.0, max_sharpness);
        if sharpness != self.sharpness {
            warn!(
                requested = self.sharpness,
                clamped = sharpness,
                extended = self.extended,
                "Sharpness out of range"
            );
        }

        let limit = if self.extended {
            let limit = self.limit.clamp(0.0, RCAS_LIMIT);
            if limit != self.limit {
                warn!(requested = self.limit, clamped = limit, "Limit out of range");
            }
            limit
        } else {
            if self.limit != RCAS_LIMIT {
                warn!(
                    requested = self.limit,
                    "Limit is only adjustable with extended features, using {RCAS_LIMIT}"
                );
            }
            RCAS_LIMIT
        };

        let luma_mode = if !self.extended && self.luma_mode == LumaMode::GreenChannel {
            warn!("Green-channel luma requires extended features, using weighted dot");
            LumaMode::WeightedDot
        } else {
            self.luma_mode
        };

        Ok(RcasParams {
            sharpness,
            limit,
            denoise: self.denoise,
            passthrough_alpha: self.passthrough_alpha,
            luma_mode,
        })
    }
}

/// Resolved kernel parameters, immutable for the duration of a sweep.
///
/// Only obtainable through [`RcasConfig::resolve`] (or `Default`), so the
/// ranges documented on [`RcasConfig`] always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RcasParams {
    sharpness: f32,
    limit: f32,
    denoise: bool,
    passthrough_alpha: bool,
    luma_mode: LumaMode,
}

impl Default for RcasParams {
    fn default() -> Self {
        Self {
            sharpness: DEFAULT_SHARPNESS,
            limit: RCAS_LIMIT,
            denoise: true,
            passthrough_alpha: false,
            luma_mode: LumaMode::WeightedDot,
        }
    }
}

impl RcasParams {
    pub fn sharpness(&self) -> f32 {
        self.sharpness
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn denoise(&self) -> bool {
        self.denoise
    }

    pub fn passthrough_alpha(&self) -> bool {
        self.passthrough_alpha
    }

    pub fn luma_mode(&self) -> LumaMode {
        self.luma_mode
    }
}

/// Convert a sharpness given in stops to the linear multiplier.
///
/// 0 stops is full strength (1.0); each stop halves the sharpening.
pub fn sharpness_from_stops(stops: f32) -> f32 {
    (-stops).exp2()
}
