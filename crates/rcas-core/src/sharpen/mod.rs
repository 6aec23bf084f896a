//! Robust contrast adaptive sharpening.
//!
//! Per pixel: gather the cross-shaped neighborhood, estimate how noisy it
//! looks from luma, solve the largest negative lobe that does not clip, and
//! blend the ring into the center with that lobe.

pub mod lobe;
pub mod noise;
pub mod params;
pub mod rcas;

pub use params::{sharpness_from_stops, RcasConfig, RcasParams};
pub use rcas::{
    lobe_weight, rcas_pixel, resolve, sharpen, sharpen_interleaved, sharpen_mono, sharpen_with,
};
