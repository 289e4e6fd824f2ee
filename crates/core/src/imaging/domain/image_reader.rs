use std::path::Path;

use crate::shared::error::BatchError;
use crate::shared::frame::Frame;

/// Decodes a single image file into a frame.
pub trait ImageReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Frame, BatchError>;
}
