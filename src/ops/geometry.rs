//! Geometric transforms: rotate, mirror, crop.
//!
//! Each returns a freshly allocated image and leaves the source
//! untouched. Failure happens only on the allocation path (or an invalid
//! rectangle, for crop), in which case no image is returned.

use crate::image::GrayImage;
use crate::util::{GrayMapError, GrayMapResult};

impl GrayImage {
    /// Returns the image rotated by 90 degrees.
    ///
    /// The result is `height x width`; source `(x, y)` maps to
    /// `(y, width - 1 - x)`, so the top row becomes the left column.
    /// Applying the rotation four times restores the original image.
    pub fn rotate90(&self) -> GrayMapResult<GrayImage> {
        let mut out = self.new_derived(self.height(), self.width())?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                let value = self.get(x, y);
                out.set(y, self.width() - 1 - x, value);
            }
        }
        Ok(out)
    }

    /// Returns the image flipped left-right.
    pub fn mirror(&self) -> GrayMapResult<GrayImage> {
        let mut out = self.new_derived(self.width(), self.height())?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                let value = self.get(x, y);
                out.set(self.width() - 1 - x, y, value);
            }
        }
        Ok(out)
    }

    /// Returns the `w x h` sub-image anchored at `(x, y)`.
    ///
    /// The rectangle must lie fully inside the image; an out-of-range
    /// rectangle is an expected input and reports
    /// [`GrayMapError::InvalidRect`] rather than panicking.
    pub fn crop(&self, x: usize, y: usize, w: usize, h: usize) -> GrayMapResult<GrayImage> {
        if !self.is_valid_rect(x, y, w, h) {
            return Err(GrayMapError::InvalidRect {
                x,
                y,
                width: w,
                height: h,
                img_width: self.width(),
                img_height: self.height(),
            });
        }
        let mut out = self.new_derived(w, h)?;
        for i in 0..h {
            for j in 0..w {
                let value = self.get(x + j, y + i);
                out.set(j, i, value);
            }
        }
        Ok(out)
    }
}
