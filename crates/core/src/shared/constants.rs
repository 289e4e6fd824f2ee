/// Workers used when no explicit count is configured.
pub const DEFAULT_WORKER_COUNT: usize = 2;

/// File name suffix (without the dot) selected by the scanner.
pub const SOURCE_EXTENSION: &str = "jpg";

/// Marker inserted between the source file name and the output extension.
pub const BLURRED_MARKER: &str = "_blurred";

/// Gaussian sigma of the fixed blur, roughly a 5x5 smoothing kernel.
pub const DEFAULT_BLUR_SIGMA: f32 = 2.0;

/// Quality used when encoding blurred output as JPEG.
pub const JPEG_QUALITY: u8 = 75;
