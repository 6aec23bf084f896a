use approx::assert_relative_eq;

use rcas_core::color::LumaMode;
use rcas_core::consts::{EXTENDED_MAX_SHARPNESS, RCAS_LIMIT};
use rcas_core::error::RcasError;
use rcas_core::pipeline::config::PipelineConfig;
use rcas_core::pipeline::PipelineStage;
use rcas_core::sampler::BorderMode;
use rcas_core::sharpen::{sharpness_from_stops, RcasConfig, RcasParams};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_config() {
    let c = RcasConfig::default();
    assert_eq!(c.sharpness, 1.0);
    assert_eq!(c.limit, 0.1875);
    assert!(c.denoise);
    assert!(!c.passthrough_alpha);
    assert_eq!(c.luma_mode, LumaMode::WeightedDot);
    assert!(!c.extended);
    assert_eq!(c.border, BorderMode::Clamp);
}

#[test]
fn test_default_resolves_to_default_params() {
    let p = RcasConfig::default().resolve().unwrap();
    assert_eq!(p, RcasParams::default());
}

#[test]
fn test_limit_constant() {
    assert_eq!(RCAS_LIMIT, 0.25 - 1.0 / 16.0);
}

// ---------------------------------------------------------------------------
// Standard mode clamping
// ---------------------------------------------------------------------------

#[test]
fn test_standard_sharpness_clamped_to_one() {
    let c = RcasConfig {
        sharpness: 1.25,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().sharpness(), 1.0);
}

#[test]
fn test_negative_sharpness_clamped_to_zero() {
    let c = RcasConfig {
        sharpness: -0.5,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().sharpness(), 0.0);
}

#[test]
fn test_standard_limit_is_fixed() {
    let c = RcasConfig {
        limit: 0.05,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().limit(), RCAS_LIMIT);
}

#[test]
fn test_standard_green_luma_falls_back() {
    let c = RcasConfig {
        luma_mode: LumaMode::GreenChannel,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().luma_mode(), LumaMode::WeightedDot);
}

// ---------------------------------------------------------------------------
// Extended mode
// ---------------------------------------------------------------------------

#[test]
fn test_extended_sharpness_range() {
    let c = RcasConfig {
        sharpness: 1.2,
        extended: true,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().sharpness(), 1.2);

    let c = RcasConfig {
        sharpness: 5.0,
        extended: true,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().sharpness(), EXTENDED_MAX_SHARPNESS);
}

#[test]
fn test_extended_limit_adjustable_and_clamped() {
    let c = RcasConfig {
        limit: 0.05,
        extended: true,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().limit(), 0.05);

    let c = RcasConfig {
        limit: 0.3,
        extended: true,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().limit(), RCAS_LIMIT);

    let c = RcasConfig {
        limit: -1.0,
        extended: true,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().limit(), 0.0);
}

#[test]
fn test_extended_green_luma_kept() {
    let c = RcasConfig {
        luma_mode: LumaMode::GreenChannel,
        extended: true,
        ..Default::default()
    };
    assert_eq!(c.resolve().unwrap().luma_mode(), LumaMode::GreenChannel);
}

#[test]
fn test_flags_carried() {
    let c = RcasConfig {
        denoise: false,
        passthrough_alpha: true,
        ..Default::default()
    };
    let p = c.resolve().unwrap();
    assert!(!p.denoise());
    assert!(p.passthrough_alpha());
}

// ---------------------------------------------------------------------------
// Invalid values
// ---------------------------------------------------------------------------

#[test]
fn test_nan_sharpness_rejected() {
    let c = RcasConfig {
        sharpness: f32::NAN,
        ..Default::default()
    };
    assert!(matches!(c.resolve(), Err(RcasError::InvalidConfig(_))));
}

#[test]
fn test_infinite_limit_rejected() {
    let c = RcasConfig {
        limit: f32::INFINITY,
        extended: true,
        ..Default::default()
    };
    assert!(matches!(c.resolve(), Err(RcasError::InvalidConfig(_))));
}

// ---------------------------------------------------------------------------
// Stops
// ---------------------------------------------------------------------------

#[test]
fn test_sharpness_from_stops() {
    assert_relative_eq!(sharpness_from_stops(0.0), 1.0);
    assert_relative_eq!(sharpness_from_stops(1.0), 0.5);
    assert_relative_eq!(sharpness_from_stops(2.0), 0.25);
    assert_relative_eq!(sharpness_from_stops(0.5), std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_empty_json_uses_defaults() {
    let c: RcasConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(c, RcasConfig::default());
}

#[test]
fn test_partial_json() {
    let c: RcasConfig =
        serde_json::from_str(r#"{"sharpness": 0.5, "luma_mode": "GreenChannel", "border": "Wrap"}"#)
            .unwrap();
    assert_eq!(c.sharpness, 0.5);
    assert_eq!(c.luma_mode, LumaMode::GreenChannel);
    assert_eq!(c.border, BorderMode::Wrap);
    assert!(c.denoise);
}

#[test]
fn test_config_roundtrip_json() {
    let c = RcasConfig {
        sharpness: 0.8,
        limit: 0.1,
        denoise: false,
        passthrough_alpha: true,
        luma_mode: LumaMode::GreenChannel,
        extended: true,
        border: BorderMode::Mirror,
    };
    let json = serde_json::to_string(&c).unwrap();
    let restored: RcasConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, c);
}

#[test]
fn test_pipeline_config_defaults() {
    let p: PipelineConfig =
        serde_json::from_str(r#"{"input": "in.png", "output": "out.png"}"#).unwrap();
    assert_eq!(p.input.to_str(), Some("in.png"));
    assert!(!p.force_mono);
    assert_eq!(p.rcas, RcasConfig::default());
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_display_names() {
    assert_eq!(format!("{}", LumaMode::WeightedDot), "Weighted dot");
    assert_eq!(format!("{}", LumaMode::GreenChannel), "Green channel");
    assert_eq!(format!("{}", BorderMode::Mirror), "Mirror");
    assert_eq!(format!("{}", PipelineStage::Sharpening), "Sharpening");
}
