use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::error::BatchError;
use crate::shared::frame::Frame;

/// Reads image files with the `image` crate, converting to RGB8.
///
/// The format is sniffed from the file contents, falling back to the
/// extension when the header is not recognised.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, BatchError> {
        let read_err = |source: std::io::Error| BatchError::Read {
            path: path.to_path_buf(),
            source,
        };

        let decoded = image::ImageReader::open(path)
            .map_err(read_err)?
            .with_guessed_format()
            .map_err(read_err)?
            .decode()
            .map_err(|source| BatchError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Frame::from(decoded.to_rgb8()))
    }
}
