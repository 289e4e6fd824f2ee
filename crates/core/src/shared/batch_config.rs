use super::constants::{DEFAULT_BLUR_SIGMA, DEFAULT_WORKER_COUNT, SOURCE_EXTENSION};

/// Settings for one batch run, passed explicitly through the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Number of workers the dispatcher fans images out to.
    pub workers: usize,
    /// File name suffix (without the dot) the scanner matches.
    pub extension: String,
    /// Gaussian sigma of the blur.
    pub blur_sigma: f32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKER_COUNT,
            extension: SOURCE_EXTENSION.to_string(),
            blur_sigma: DEFAULT_BLUR_SIGMA,
        }
    }
}
