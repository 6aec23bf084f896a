mod common;

use ndarray::Array2;

use rcas_core::color::ColorSample;
use rcas_core::frame::{ColorFrame, Frame};
use rcas_core::sampler::{BorderMode, FrameSampler, NeighborSampler, Neighborhood, PlaneSampler};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 4x3 frame whose red plane encodes the column and green plane the row.
fn make_coordinate_frame() -> ColorFrame {
    let (h, w) = (3, 4);
    let red = Array2::from_shape_fn((h, w), |(_, col)| col as f32);
    let green = Array2::from_shape_fn((h, w), |(row, _)| row as f32);
    let blue = Array2::from_elem((h, w), 0.5);
    ColorFrame::rgb(Frame::new(red, 8), Frame::new(green, 8), Frame::new(blue, 8))
}

fn coord(sample: ColorSample) -> (usize, usize) {
    (sample.r as usize, sample.g as usize)
}

// ---------------------------------------------------------------------------
// BorderMode
// ---------------------------------------------------------------------------

#[test]
fn test_clamp_border() {
    assert_eq!(BorderMode::Clamp.resolve(-1, 4), 0);
    assert_eq!(BorderMode::Clamp.resolve(4, 4), 3);
    assert_eq!(BorderMode::Clamp.resolve(2, 4), 2);
}

#[test]
fn test_wrap_border() {
    assert_eq!(BorderMode::Wrap.resolve(-1, 4), 3);
    assert_eq!(BorderMode::Wrap.resolve(4, 4), 0);
    assert_eq!(BorderMode::Wrap.resolve(-5, 4), 3);
}

#[test]
fn test_mirror_border() {
    assert_eq!(BorderMode::Mirror.resolve(-1, 4), 1);
    assert_eq!(BorderMode::Mirror.resolve(4, 4), 2);
    assert_eq!(BorderMode::Mirror.resolve(0, 4), 0);
}

#[test]
fn test_border_default_is_clamp() {
    assert_eq!(BorderMode::default(), BorderMode::Clamp);
}

// ---------------------------------------------------------------------------
// FrameSampler
// ---------------------------------------------------------------------------

#[test]
fn test_gather_interior_pixel() {
    let frame = make_coordinate_frame();
    let sampler = FrameSampler::new(&frame, BorderMode::Clamp);
    let n = Neighborhood::gather(&sampler, 1, 1);

    assert_eq!(coord(n.e), (1, 1));
    assert_eq!(coord(n.b), (1, 0));
    assert_eq!(coord(n.h), (1, 2));
    assert_eq!(coord(n.d), (0, 1));
    assert_eq!(coord(n.f), (2, 1));
}

#[test]
fn test_gather_corner_clamp() {
    let frame = make_coordinate_frame();
    let sampler = FrameSampler::new(&frame, BorderMode::Clamp);
    let n = Neighborhood::gather(&sampler, 0, 0);

    assert_eq!(coord(n.b), (0, 0));
    assert_eq!(coord(n.d), (0, 0));
}

#[test]
fn test_gather_corner_wrap() {
    let frame = make_coordinate_frame();
    let sampler = FrameSampler::new(&frame, BorderMode::Wrap);
    let n = Neighborhood::gather(&sampler, 0, 0);

    assert_eq!(coord(n.b), (0, 2));
    assert_eq!(coord(n.d), (3, 0));
}

#[test]
fn test_gather_corner_mirror() {
    let frame = make_coordinate_frame();
    let sampler = FrameSampler::new(&frame, BorderMode::Mirror);
    let n = Neighborhood::gather(&sampler, 3, 2);

    assert_eq!(coord(n.f), (2, 2));
    assert_eq!(coord(n.h), (3, 1));
}

#[test]
fn test_frame_sampler_alpha() {
    let mut frame = make_coordinate_frame();
    let sampler = FrameSampler::new(&frame, BorderMode::Clamp);
    assert_eq!(sampler.alpha(0, 0), None);

    frame.alpha = Some(Frame::new(Array2::from_elem((3, 4), 0.25), 8));
    let sampler = FrameSampler::new(&frame, BorderMode::Clamp);
    assert_eq!(sampler.alpha(3, 2), Some(0.25));
    assert_eq!(sampler.dimensions(), (4, 3));
}

// ---------------------------------------------------------------------------
// PlaneSampler
// ---------------------------------------------------------------------------

#[test]
fn test_plane_sampler_replicates_gray() {
    let frame = common::make_step_frame(3, 3, 1, 0.2, 0.8);
    let sampler = PlaneSampler::new(&frame, BorderMode::Clamp);
    let n = Neighborhood::gather(&sampler, 1, 1);

    assert_eq!(n.e, ColorSample::splat(0.8));
    assert_eq!(n.d, ColorSample::splat(0.2));
    assert_eq!(sampler.alpha(1, 1), None);
}

// ---------------------------------------------------------------------------
// Neighborhood
// ---------------------------------------------------------------------------

#[test]
fn test_uniform_detection() {
    let c = ColorSample::new(0.1, 0.2, 0.3);
    assert!(Neighborhood::uniform(c).is_uniform());

    let mut n = Neighborhood::uniform(c);
    n.h = ColorSample::new(0.1, 0.2, 0.31);
    assert!(!n.is_uniform());
}
