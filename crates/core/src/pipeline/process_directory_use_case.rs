use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::blurring::infrastructure::gaussian_blurrer::GaussianBlurrer;
use crate::imaging::infrastructure::image_file_reader::ImageFileReader;
use crate::imaging::infrastructure::image_file_writer::ImageFileWriter;
use crate::pipeline::batch_executor::BatchExecutor;
use crate::pipeline::batch_logger::BatchLogger;
use crate::pipeline::infrastructure::executor_factory::create_executor;
use crate::pipeline::process_image_use_case::ProcessImageUseCase;
use crate::scanning::path_scanner::PathScanner;
use crate::shared::batch_config::BatchConfig;
use crate::shared::error::BatchError;

/// Outcome of a successful batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// `(source, output)` pairs in scan order.
    pub outputs: Vec<(PathBuf, PathBuf)>,
    pub elapsed: Duration,
}

/// Directory pipeline: scan → dispatch to workers → report.
///
/// Every matching image is processed exactly once. The first failing image
/// aborts the whole run.
pub struct ProcessDirectoryUseCase {
    scanner: PathScanner,
    image_use_case: ProcessImageUseCase,
    executor: Box<dyn BatchExecutor>,
    logger: Box<dyn BatchLogger>,
    extension: String,
}

impl ProcessDirectoryUseCase {
    pub fn new(
        extension: &str,
        image_use_case: ProcessImageUseCase,
        executor: Box<dyn BatchExecutor>,
        logger: Box<dyn BatchLogger>,
    ) -> Self {
        Self {
            scanner: PathScanner::new(extension),
            image_use_case,
            executor,
            logger,
            extension: extension.to_string(),
        }
    }

    /// Wires the file-based reader/writer, the Gaussian blurrer and an
    /// executor sized from `config`.
    pub fn from_config(config: &BatchConfig, logger: Box<dyn BatchLogger>) -> Self {
        let image_use_case = ProcessImageUseCase::new(
            Box::new(ImageFileReader::new()),
            Box::new(ImageFileWriter::new()),
            Box::new(GaussianBlurrer::new(config.blur_sigma)),
        );
        Self::new(
            &config.extension,
            image_use_case,
            create_executor(config.workers),
            logger,
        )
    }

    pub fn execute(&mut self, source_dir: &Path, dest_dir: &Path) -> Result<BatchReport, BatchError> {
        let start = Instant::now();
        self.logger
            .started(self.executor.workers(), &self.extension, source_dir);

        let sources = self.scanner.scan(source_dir);
        log::debug!(
            "Found {} .{} file(s) in {}",
            sources.len(),
            self.extension,
            source_dir.display()
        );

        let outputs = self
            .executor
            .execute(&self.image_use_case, &sources, dest_dir)?;

        for output in &outputs {
            self.logger.image_ready(output);
        }

        let elapsed = start.elapsed();
        self.logger.finished(outputs.len(), elapsed);

        Ok(BatchReport {
            outputs: sources.into_iter().zip(outputs).collect(),
            elapsed,
        })
    }
}
