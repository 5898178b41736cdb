//! Error types for graymap.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for graymap operations.
pub type GrayMapResult<T> = std::result::Result<T, GrayMapError>;

/// Errors reported by graymap constructors, transforms and PGM I/O.
///
/// Contract violations (out-of-range coordinates or rectangles passed to
/// the unchecked primitives) panic instead; these variants cover the
/// recoverable class: bad construction parameters, allocation failure,
/// malformed PGM streams and I/O failures. The [`GrayMapError::Io`]
/// variant keeps the originating [`std::io::Error`] as its source, so the
/// OS error code stays available to callers.
#[derive(Debug, Error)]
pub enum GrayMapError {
    /// Width and height do not describe a representable image.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The white level must lie in `1..=255`.
    #[error("invalid maxval {maxval}: must be in 1..=255")]
    InvalidMaxval { maxval: u32 },
    /// A raw sample buffer does not match the declared dimensions.
    #[error("pixel buffer holds {got} samples, expected {expected} for a {width}x{height} image")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },
    /// A raw sample exceeds the declared white level.
    #[error("sample value {value} exceeds maxval {maxval}")]
    SampleOutOfRange { value: u8, maxval: u8 },
    /// Sample storage could not be obtained.
    #[error("allocation of {bytes} bytes for a {width}x{height} image failed")]
    Allocation {
        width: usize,
        height: usize,
        bytes: usize,
    },
    /// A rectangle does not lie fully inside the image.
    #[error("rectangle ({x}, {y}) {width}x{height} does not fit a {img_width}x{img_height} image")]
    InvalidRect {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The stream is not a raw PGM file.
    #[error("not a raw PGM stream: {reason}")]
    BadFormat { reason: &'static str },
    /// The PGM pixel payload ended early.
    #[error("pixel data truncated: expected {expected} bytes, got {got}")]
    TruncatedPixels { expected: usize, got: usize },
    /// An underlying file operation failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Decoding through the `image` crate failed.
    #[cfg(feature = "image-io")]
    #[error("image decode failed: {reason}")]
    ImageIo { reason: String },
}
