use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a batch run.
///
/// Every variant is `Send + Sync` so errors can travel back from worker
/// threads to the dispatcher.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("frame data does not match {width}x{height}x{channels}")]
    InvalidFrame { width: u32, height: u32, channels: u8 },
    #[error("worker thread panicked")]
    WorkerPanicked,
}
