use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rcas_core::color::LumaMode;
use rcas_core::pipeline::config::PipelineConfig;
use rcas_core::pipeline::{run_pipeline_reported, PipelineStage, ProgressReporter};
use rcas_core::sampler::BorderMode;
use rcas_core::sharpen::params::{sharpness_from_stops, RcasConfig};

#[derive(Clone, ValueEnum)]
pub enum LumaArg {
    /// Weighted dot product (0.5, 1.0, 0.5)
    Dot,
    /// Green channel only (requires --extended)
    Green,
}

#[derive(Clone, ValueEnum)]
pub enum BorderArg {
    Clamp,
    Mirror,
    Wrap,
}

#[derive(Args)]
pub struct SharpenArgs {
    /// Input image files (PNG, TIFF, ...). May be omitted when --config names an input.
    pub files: Vec<PathBuf>,

    /// Pipeline config file (TOML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sharpening strength, 0.0 to 1.0 (1.3 with --extended)
    #[arg(long, conflicts_with = "stops")]
    pub sharpness: Option<f32>,

    /// Sharpening in stops: 0 = full strength, each stop halves it
    #[arg(long)]
    pub stops: Option<f32>,

    /// Maximum lobe magnitude, 0.0 to 0.1875 (requires --extended)
    #[arg(long)]
    pub limit: Option<f32>,

    /// Disable noise-adaptive attenuation
    #[arg(long)]
    pub no_denoise: bool,

    /// Copy the input alpha channel to the output
    #[arg(long)]
    pub passthrough_alpha: bool,

    /// Luma formula for noise detection
    #[arg(long, value_enum)]
    pub luma: Option<LumaArg>,

    /// Enable extended ranges and green-channel luma
    #[arg(long)]
    pub extended: bool,

    /// Border handling for edge pixels
    #[arg(long, value_enum)]
    pub border: Option<BorderArg>,

    /// Process as a single gray plane
    #[arg(long)]
    pub mono: bool,

    /// Output file path (single input only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing
    #[arg(long, conflicts_with = "output")]
    pub out_dir: Option<PathBuf>,
}

/// Drives an indicatif bar from pipeline stage events.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage) {
        self.pb.set_message(stage.to_string());
    }
}

pub fn run(args: &SharpenArgs) -> Result<()> {
    let base = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let config: PipelineConfig = toml::from_str(&contents).context("Invalid pipeline config")?;
        Some(config)
    } else {
        None
    };

    let mut rcas = base
        .as_ref()
        .map(|c| c.rcas.clone())
        .unwrap_or_default();
    apply_overrides(&mut rcas, args);

    let jobs = build_jobs(args, base.as_ref(), &rcas)?;
    if jobs.is_empty() {
        anyhow::bail!("No input files given (pass files or a --config with an input)");
    }

    // Resolve once up front so configuration errors surface before any I/O.
    let params = rcas.resolve().context("Invalid sharpening parameters")?;
    crate::summary::print_sharpen_summary(&rcas, &params);

    let pb = ProgressBar::new(jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { pb: pb.clone() });

    for job in &jobs {
        run_pipeline_reported(job, reporter.clone())
            .with_context(|| format!("Failed to sharpen {}", job.input.display()))?;
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    for job in &jobs {
        println!("Saved to {}", job.output.display());
    }

    Ok(())
}

fn apply_overrides(rcas: &mut RcasConfig, args: &SharpenArgs) {
    if args.extended {
        rcas.extended = true;
    }
    if let Some(sharpness) = args.sharpness {
        rcas.sharpness = sharpness;
    }
    if let Some(stops) = args.stops {
        rcas.sharpness = sharpness_from_stops(stops);
    }
    if let Some(limit) = args.limit {
        rcas.limit = limit;
    }
    if args.no_denoise {
        rcas.denoise = false;
    }
    if args.passthrough_alpha {
        rcas.passthrough_alpha = true;
    }
    if let Some(ref luma) = args.luma {
        rcas.luma_mode = match luma {
            LumaArg::Dot => LumaMode::WeightedDot,
            LumaArg::Green => LumaMode::GreenChannel,
        };
    }
    if let Some(ref border) = args.border {
        rcas.border = match border {
            BorderArg::Clamp => BorderMode::Clamp,
            BorderArg::Mirror => BorderMode::Mirror,
            BorderArg::Wrap => BorderMode::Wrap,
        };
    }
}

fn build_jobs(
    args: &SharpenArgs,
    base: Option<&PipelineConfig>,
    rcas: &RcasConfig,
) -> Result<Vec<PipelineConfig>> {
    let force_mono = args.mono || base.is_some_and(|c| c.force_mono);

    if args.files.is_empty() {
        return Ok(base
            .map(|c| PipelineConfig {
                input: c.input.clone(),
                output: args.output.clone().unwrap_or_else(|| c.output.clone()),
                force_mono,
                rcas: rcas.clone(),
            })
            .into_iter()
            .collect());
    }

    if args.output.is_some() && args.files.len() > 1 {
        anyhow::bail!("--output takes a single input; use --out-dir for batches");
    }

    if let Some(ref dir) = args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    Ok(args
        .files
        .iter()
        .map(|input| {
            let output = match (&args.output, &args.out_dir) {
                (Some(out), _) => out.clone(),
                (None, Some(dir)) => dir.join(default_output_name(input)),
                (None, None) => input.with_file_name(default_output_name(input)),
            };
            PipelineConfig {
                input: input.clone(),
                output,
                force_mono,
                rcas: rcas.clone(),
            }
        })
        .collect())
}

/// `photo.png` → `photo_rcas.png`. Unknown extensions fall back to TIFF.
fn default_output_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let ext = match input.extension().and_then(|e| e.to_str()) {
        Some(ext @ ("png" | "tif" | "tiff")) => ext.to_string(),
        _ => "tiff".to_string(),
    };
    PathBuf::from(format!("{stem}_rcas.{ext}"))
}
