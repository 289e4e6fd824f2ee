use crate::shared::error::BatchError;
use crate::shared::frame::Frame;

/// Domain interface for producing a blurred copy of a frame.
///
/// The source frame is left untouched.
pub trait FrameBlurrer: Send + Sync {
    fn blur(&self, frame: &Frame) -> Result<Frame, BatchError>;
}
