use crate::frame::{ColorFrame, Frame};

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Sharpening,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Sharpening => write!(f, "Sharpening"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Result of the pipeline, either mono or color.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum PipelineOutput {
    Mono(Frame),
    Color(ColorFrame),
}

impl PipelineOutput {
    pub fn width(&self) -> usize {
        match self {
            Self::Mono(f) => f.width(),
            Self::Color(cf) => cf.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Mono(f) => f.height(),
            Self::Color(cf) => cf.height(),
        }
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars or logging. All methods
/// have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started.
    fn begin_stage(&self, _stage: PipelineStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
