//! Compositing: paste and blend one image into another.
//!
//! Both operate in place on the destination. The source rectangle
//! anchored at `(x, y)` must fit inside the destination; violating that
//! is a caller bug and panics.

use crate::image::GrayImage;

impl GrayImage {
    /// Overwrites the region anchored at `(x, y)` with the samples of
    /// `src`. No saturation is needed: both images hold in-range samples.
    ///
    /// # Panics
    /// Panics if `src` does not fit inside `self` at `(x, y)`, or if
    /// `src.maxval()` exceeds `self.maxval()` (its samples could then be
    /// out of range for the destination).
    pub fn paste(&mut self, x: usize, y: usize, src: &GrayImage) {
        assert!(
            self.is_valid_rect(x, y, src.width(), src.height()),
            "pasted {}x{} image does not fit at ({x}, {y})",
            src.width(),
            src.height()
        );
        assert!(
            src.maxval() <= self.maxval(),
            "pasted image maxval {} exceeds destination maxval {}",
            src.maxval(),
            self.maxval()
        );
        for i in 0..src.height() {
            for j in 0..src.width() {
                let value = src.get(j, i);
                self.set(x + j, y + i, value);
            }
        }
    }

    /// Blends `src` into the region anchored at `(x, y)`:
    /// `new = round(alpha * src + (1 - alpha) * dst)`, rounded half-up
    /// and saturated into `[0, maxval]`.
    ///
    /// `alpha` is conventionally in `[0, 1]`, but values outside that
    /// interval are accepted and extrapolate; over- and underflows
    /// saturate.
    ///
    /// # Panics
    /// Panics if `src` does not fit inside `self` at `(x, y)`.
    pub fn blend(&mut self, x: usize, y: usize, src: &GrayImage, alpha: f64) {
        assert!(
            self.is_valid_rect(x, y, src.width(), src.height()),
            "blended {}x{} image does not fit at ({x}, {y})",
            src.width(),
            src.height()
        );
        let ceiling = f64::from(self.maxval());
        for i in 0..src.height() {
            for j in 0..src.width() {
                let dst = f64::from(self.get(x + j, y + i));
                let over = f64::from(src.get(j, i));
                let mixed = (alpha * over + (1.0 - alpha) * dst + 0.5).floor();
                self.set(x + j, y + i, mixed.clamp(0.0, ceiling) as u8);
            }
        }
    }
}
