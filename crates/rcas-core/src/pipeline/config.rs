use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sharpen::params::RcasConfig;

/// A single load → sharpen → save job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Process the input as a single gray plane even if it has color.
    #[serde(default)]
    pub force_mono: bool,
    #[serde(default)]
    pub rcas: RcasConfig,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            force_mono: false,
            rcas: RcasConfig::default(),
        }
    }
}
