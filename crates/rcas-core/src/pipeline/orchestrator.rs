use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::frame::ColorType;
use crate::io::image_io::{
    image_info, load_color_image, load_image, save_color_image, save_image,
};
use crate::sharpen::{sharpen, sharpen_mono};

use super::config::PipelineConfig;
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Run load → sharpen → save with a thread-safe progress reporter.
///
/// Gray sources without alpha (and any source when `force_mono` is set) are
/// processed as a single plane and written as gray.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    let params = config.rcas.resolve()?;
    let border = config.rcas.border;

    reporter.begin_stage(PipelineStage::Reading);
    let source = image_info(&config.input)?;
    info!(
        input = %config.input.display(),
        width = source.width,
        height = source.height,
        color = %source.color_type,
        "Reading image"
    );
    let mono = config.force_mono || source.color_type == ColorType::Gray;
    let output = if mono {
        PipelineOutput::Mono(load_image(&config.input)?)
    } else {
        PipelineOutput::Color(load_color_image(&config.input)?)
    };
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Sharpening);
    let output = match output {
        PipelineOutput::Mono(frame) => PipelineOutput::Mono(sharpen_mono(&frame, &params, border)?),
        PipelineOutput::Color(color) => PipelineOutput::Color(sharpen(&color, &params, border)?),
    };
    info!(
        sharpness = params.sharpness(),
        limit = params.limit(),
        denoise = params.denoise(),
        luma = %params.luma_mode(),
        "Sharpening complete"
    );
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing);
    match &output {
        PipelineOutput::Mono(frame) => save_image(frame, &config.output)?,
        PipelineOutput::Color(color) => save_color_image(color, &config.output)?,
    }
    info!(output = %config.output.display(), "Output saved");
    reporter.finish_stage();

    Ok(output)
}

/// Run load → sharpen → save without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
