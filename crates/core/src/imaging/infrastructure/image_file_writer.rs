use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::constants::JPEG_QUALITY;
use crate::shared::error::BatchError;
use crate::shared::frame::Frame;

/// Writes frames as JPEG files regardless of the target extension.
///
/// The parent directory must already exist; it is never created here.
pub struct ImageFileWriter {
    quality: u8,
}

impl ImageFileWriter {
    pub fn new() -> Self {
        Self {
            quality: JPEG_QUALITY,
        }
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), BatchError> {
        let write_err = |source: image::ImageError| BatchError::Write {
            path: path.to_path_buf(),
            source,
        };

        let img = frame.to_rgb_image()?;
        let file = File::create(path).map_err(|e| write_err(image::ImageError::IoError(e)))?;
        let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), self.quality);
        encoder.encode_image(&img).map_err(write_err)?;
        Ok(())
    }
}
