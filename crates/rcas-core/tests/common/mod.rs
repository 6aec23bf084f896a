#![allow(dead_code)]

use ndarray::Array2;

use rcas_core::color::ColorSample;
use rcas_core::frame::{ColorFrame, Frame};
use rcas_core::sampler::Neighborhood;

/// Small deterministic xorshift generator so property tests are repeatable
/// without pulling in a random-number crate.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform value in [0, 1).
    pub fn unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform value in [lo, hi).
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.unit()
    }

    pub fn color(&mut self, lo: f32, hi: f32) -> ColorSample {
        ColorSample::new(self.range(lo, hi), self.range(lo, hi), self.range(lo, hi))
    }

    pub fn neighborhood(&mut self, lo: f32, hi: f32) -> Neighborhood {
        Neighborhood {
            b: self.color(lo, hi),
            d: self.color(lo, hi),
            e: self.color(lo, hi),
            f: self.color(lo, hi),
            h: self.color(lo, hi),
        }
    }
}

/// Neighborhood with the given center and a ring of one color.
pub fn ring_of(ring: ColorSample, e: ColorSample) -> Neighborhood {
    Neighborhood {
        b: ring,
        d: ring,
        e,
        f: ring,
        h: ring,
    }
}

pub fn make_frame(h: usize, w: usize, fill: f32) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill), 8)
}

pub fn make_color_frame(h: usize, w: usize, r: f32, g: f32, b: f32) -> ColorFrame {
    ColorFrame::rgb(make_frame(h, w, r), make_frame(h, w, g), make_frame(h, w, b))
}

/// Color frame filled with pseudo-random values in [0, 1).
pub fn make_noise_color_frame(h: usize, w: usize, seed: u64, with_alpha: bool) -> ColorFrame {
    let mut rng = Rng::new(seed);
    let mut plane = || Frame::new(Array2::from_shape_fn((h, w), |_| rng.unit()), 8);
    let red = plane();
    let green = plane();
    let blue = plane();
    let alpha = with_alpha.then(&mut plane);
    ColorFrame {
        red,
        green,
        blue,
        alpha,
    }
}

/// Mono frame with a vertical step edge: `lo` left of `edge_col`, `hi` from it on.
pub fn make_step_frame(h: usize, w: usize, edge_col: usize, lo: f32, hi: f32) -> Frame {
    Frame::new(
        Array2::from_shape_fn((h, w), |(_, col)| if col < edge_col { lo } else { hi }),
        8,
    )
}
