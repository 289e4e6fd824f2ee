use std::path::{Path, PathBuf};

use crate::pipeline::batch_executor::BatchExecutor;
use crate::pipeline::process_image_use_case::ProcessImageUseCase;
use crate::shared::error::BatchError;

/// Processes images one after another on the calling thread.
pub struct SequentialExecutor;

impl BatchExecutor for SequentialExecutor {
    fn execute(
        &self,
        use_case: &ProcessImageUseCase,
        sources: &[PathBuf],
        dest_dir: &Path,
    ) -> Result<Vec<PathBuf>, BatchError> {
        sources
            .iter()
            .map(|source| use_case.execute(source, dest_dir))
            .collect()
    }

    fn workers(&self) -> usize {
        1
    }
}
