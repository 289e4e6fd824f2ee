use std::path::{Path, PathBuf};

use crate::pipeline::process_image_use_case::ProcessImageUseCase;
use crate::shared::error::BatchError;

/// Abstracts how per-image work is scheduled across workers.
///
/// Implementations run `use_case` once for every source and return the
/// output paths in the same order as `sources`. The first failure aborts
/// the batch and is returned; nothing is retried.
pub trait BatchExecutor: Send {
    fn execute(
        &self,
        use_case: &ProcessImageUseCase,
        sources: &[PathBuf],
        dest_dir: &Path,
    ) -> Result<Vec<PathBuf>, BatchError>;

    /// Number of workers this executor runs, for reporting.
    fn workers(&self) -> usize;
}
