//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoded images use
//! the full 8-bit range, so buffers built here carry `maxval == 255`.

use std::path::Path;

use crate::image::GrayImage;
use crate::util::{GrayMapError, GrayMapResult};

/// Creates an owned buffer from a decoded grayscale image.
pub fn from_gray_image(img: &image::GrayImage) -> GrayMapResult<GrayImage> {
    GrayImage::from_raw(
        img.as_raw().clone(),
        img.width() as usize,
        img.height() as usize,
        255,
    )
}

/// Converts a buffer into an `image` crate grayscale image.
pub fn to_gray_image(img: &GrayImage) -> GrayMapResult<image::GrayImage> {
    image::GrayImage::from_raw(img.width() as u32, img.height() as u32, img.as_raw().to_vec())
        .ok_or(GrayMapError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        })
}

/// Creates an owned buffer from any dynamic image, converting to
/// grayscale first.
pub fn from_dynamic_image(img: &image::DynamicImage) -> GrayMapResult<GrayImage> {
    from_gray_image(&img.to_luma8())
}

/// Loads any image the `image` crate can decode and converts it to a
/// grayscale buffer.
pub fn load_gray<P: AsRef<Path>>(path: P) -> GrayMapResult<GrayImage> {
    let img = image::open(path).map_err(|err| GrayMapError::ImageIo {
        reason: err.to_string(),
    })?;
    from_dynamic_image(&img)
}
