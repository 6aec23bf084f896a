use std::ops::{Add, Mul};

/// An RGB sample. Components are not clamped: HDR values and filter
/// overshoot above 1.0 pass through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorSample {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorSample {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// A gray sample with all three components equal to `v`.
    pub const fn splat(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.r.min(other.r),
            self.g.min(other.g),
            self.b.min(other.b),
        )
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.r.max(other.r),
            self.g.max(other.g),
            self.b.max(other.b),
        )
    }

    pub fn dot(self, w: [f32; 3]) -> f32 {
        self.r * w[0] + self.g * w[1] + self.b * w[2]
    }

    /// Largest of the three components.
    pub fn max_component(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Combine two samples component by component.
    pub fn zip_map(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }
}

impl Add for ColorSample {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f32> for ColorSample {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}
