use std::path::Path;

use crate::shared::error::BatchError;
use crate::shared::frame::Frame;

/// Encodes a frame to an image file.
pub trait ImageWriter: Send + Sync {
    /// Writes `frame` to `path`, replacing any existing file.
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), BatchError>;
}
