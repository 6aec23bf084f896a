//! Contrast limiting: the largest negative lobe that keeps the 5-tap blend
//! inside the ring's range.
//!
//! The blend is `(w * ring_sum + e) / (4w + 1)`. Solving it with the ring
//! extrema standing in for `e` gives, per channel:
//!
//! ```text
//! hit_min = min / (4 * max)            // output stays >= 0
//! hit_max = (1 - max) / (4 * min - 4)  // output stays <= 1
//! lobe    = max(-hit_min, hit_max)
//! ```
//!
//! Ring extrema are used instead of per-tap differences so that jitter in a
//! single tap does not swing the weight.

use crate::color::ColorSample;

/// Componentwise (min, max) over the four ring samples. The center is not
/// included.
#[inline]
pub fn ring_extrema(ring: &[ColorSample; 4]) -> (ColorSample, ColorSample) {
    let min = ring[0].min(ring[1]).min(ring[2]).min(ring[3]);
    let max = ring[0].max(ring[1]).max(ring[2]).max(ring[3]);
    (min, max)
}

/// Lobe candidate for one channel.
///
/// Degenerate denominators map to saturating values instead of infinities:
/// a ring maximum of zero never restricts the lobe, and a ring minimum of
/// exactly one forbids sharpening on that channel whatever the maximum is.
/// With an HDR maximum above one this is discontinuous at `min == 1.0`:
/// a minimum just above one allows a negative lobe again, while just below
/// one `hit_max` is large and positive, which also blocks sharpening.
#[inline]
pub fn channel_lobe(min: f32, max: f32) -> f32 {
    let max4 = 4.0 * max;
    let hit_min = if max4 != 0.0 { min / max4 } else { f32::MAX };

    let denom = 4.0 * min - 4.0;
    let hit_max = if denom != 0.0 { (1.0 - max) / denom } else { 0.0 };

    (-hit_min).max(hit_max)
}

/// Unlimited lobe for the ring: the least negative channel candidate, so
/// that no channel clips.
pub fn solve_lobe(ring: &[ColorSample; 4]) -> f32 {
    let (min, max) = ring_extrema(ring);
    min.zip_map(max, channel_lobe).max_component()
}

/// Clamp a solved lobe to `[-limit, 0]` and scale it by `sharpness`.
#[inline]
pub fn limit_lobe(lobe: f32, limit: f32, sharpness: f32) -> f32 {
    lobe.clamp(-limit, 0.0) * sharpness
}
