use std::path::{Path, PathBuf};

use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::output_path::derive_output_path;
use crate::shared::constants::BLURRED_MARKER;
use crate::shared::error::BatchError;

/// Single-image pipeline: read → blur → write.
///
/// Shared by reference across worker threads, so it holds no mutable state.
pub struct ProcessImageUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    blurrer: Box<dyn FrameBlurrer>,
}

impl ProcessImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        blurrer: Box<dyn FrameBlurrer>,
    ) -> Self {
        Self {
            reader,
            writer,
            blurrer,
        }
    }

    /// Blurs `source` into `dest_dir` and returns the written path.
    pub fn execute(&self, source: &Path, dest_dir: &Path) -> Result<PathBuf, BatchError> {
        log::debug!(
            "Dirname: '{}', filename: '{}'",
            source.parent().unwrap_or(Path::new("")).display(),
            source.file_name().unwrap_or_default().to_string_lossy()
        );

        let output = derive_output_path(source, dest_dir, BLURRED_MARKER);
        let frame = self.reader.read(source)?;
        let blurred = self.blurrer.blur(&frame)?;
        self.writer.write(&output, &blurred)?;
        Ok(output)
    }
}
