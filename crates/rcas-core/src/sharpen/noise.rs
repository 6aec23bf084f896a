use crate::consts::MIN_NOISE_CONFIDENCE;

/// Confidence in [0.5, 1.0] that the neighborhood is structure rather than
/// noise, from the luma of the five taps.
///
/// The center's deviation from the ring average is normalized by the local
/// range: an isolated outlier scores 0.5, a smooth ramp scores 1.0.
/// A flat neighborhood (zero range) counts as maximum detected noise.
pub fn noise_confidence(b: f32, d: f32, e: f32, f: f32, h: f32) -> f32 {
    let avg_ring = (b + d + f + h) * 0.25;
    let highpass = avg_ring - e;

    let max = b.max(d).max(e).max(f).max(h);
    let min = b.min(d).min(e).min(f).min(h);
    let range = max - min;

    let normalized = if range > 0.0 {
        (highpass.abs() / range).clamp(0.0, 1.0)
    } else {
        1.0
    };

    1.0 - MIN_NOISE_CONFIDENCE * normalized
}
