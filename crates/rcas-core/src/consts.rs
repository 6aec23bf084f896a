/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Luma weights for (R, G, B), scaled so the green weight is 1.0.
///
/// The resulting luma is roughly twice a normalized perceptual luma; the
/// noise detector works on ratios, so the scale cancels out.
pub const LUMA_WEIGHTS: [f32; 3] = [0.5, 1.0, 0.5];

/// Scale applied to the green channel in green-as-luma mode, matching the
/// "twice-luma" units of [`LUMA_WEIGHTS`].
pub const GREEN_LUMA_SCALE: f32 = 2.0;

/// Maximum lobe magnitude. Fixed in standard mode, an upper bound in
/// extended mode. At 0.25 the resolve denominator reaches zero.
pub const RCAS_LIMIT: f32 = 0.25 - 1.0 / 16.0;

/// Upper bound of `sharpness` in standard mode.
pub const STANDARD_MAX_SHARPNESS: f32 = 1.0;

/// Upper bound of `sharpness` when extended features are enabled.
pub const EXTENDED_MAX_SHARPNESS: f32 = 1.3;

/// Default sharpness multiplier.
pub const DEFAULT_SHARPNESS: f32 = 1.0;

/// Minimum confidence returned by the noise detector.
pub const MIN_NOISE_CONFIDENCE: f32 = 0.5;
