pub mod luma;
pub mod process;
pub mod sample;

pub use luma::{luma, LumaMode};
pub use sample::ColorSample;
