use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::shared::constants::DEFAULT_BLUR_SIGMA;
use crate::shared::error::BatchError;
use crate::shared::frame::Frame;

/// Whole-frame Gaussian blur delegated to `image::imageops::blur`.
pub struct GaussianBlurrer {
    sigma: f32,
}

impl GaussianBlurrer {
    /// Non-positive or non-finite sigmas fall back to the default.
    pub fn new(sigma: f32) -> Self {
        let sigma = if sigma.is_finite() && sigma > 0.0 {
            sigma
        } else {
            log::warn!("Invalid blur sigma {sigma}, using {DEFAULT_BLUR_SIGMA}");
            DEFAULT_BLUR_SIGMA
        };
        Self { sigma }
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl Default for GaussianBlurrer {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_SIGMA)
    }
}

impl FrameBlurrer for GaussianBlurrer {
    fn blur(&self, frame: &Frame) -> Result<Frame, BatchError> {
        let img = frame.to_rgb_image()?;
        Ok(Frame::from(image::imageops::blur(&img, self.sigma)))
    }
}
