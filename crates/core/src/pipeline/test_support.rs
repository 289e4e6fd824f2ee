//! Stub collaborators shared by the pipeline tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::process_image_use_case::ProcessImageUseCase;
use crate::shared::error::BatchError;
use crate::shared::frame::Frame;

pub type WrittenPaths = Arc<Mutex<Vec<PathBuf>>>;

/// Fails to decode any file whose name contains `bad`, panics on `panic`.
pub struct StubReader;

impl ImageReader for StubReader {
    fn read(&self, path: &Path) -> Result<Frame, BatchError> {
        let name = path.file_name().unwrap().to_string_lossy();
        if name.contains("panic") {
            panic!("reader blew up on {name}");
        }
        if name.contains("bad") {
            return Err(BatchError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::other("corrupt")),
            });
        }
        Ok(Frame::new(vec![128; 2 * 2 * 3], 2, 2, 3))
    }
}

/// Records written paths, optionally sleeping first to simulate encoding.
pub struct RecordingWriter {
    pub written: WrittenPaths,
    pub delay: Duration,
}

impl ImageWriter for RecordingWriter {
    fn write(&self, path: &Path, _frame: &Frame) -> Result<(), BatchError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.written.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

pub struct IdentityBlurrer;

impl FrameBlurrer for IdentityBlurrer {
    fn blur(&self, frame: &Frame) -> Result<Frame, BatchError> {
        Ok(frame.clone())
    }
}

pub fn stub_use_case() -> (ProcessImageUseCase, WrittenPaths) {
    stub_use_case_with_delay(Duration::ZERO)
}

pub fn stub_use_case_with_delay(delay: Duration) -> (ProcessImageUseCase, WrittenPaths) {
    let written: WrittenPaths = Arc::new(Mutex::new(Vec::new()));
    let uc = ProcessImageUseCase::new(
        Box::new(StubReader),
        Box::new(RecordingWriter {
            written: written.clone(),
            delay,
        }),
        Box::new(IdentityBlurrer),
    );
    (uc, written)
}

/// Builds `src/<name>` paths.
pub fn sources(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| Path::new("src").join(n)).collect()
}
