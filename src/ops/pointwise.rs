//! In-place per-pixel transforms.
//!
//! These never change image geometry and never fail. All run in
//! O(width * height) through the counted pixel accessors.

use crate::image::GrayImage;

impl GrayImage {
    /// Inverts every sample (`new = maxval - old`), the photographic
    /// negative. An involution: applying it twice restores the image.
    pub fn negate(&mut self) {
        let maxval = self.maxval();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let value = self.get(x, y);
                self.set(x, y, maxval - value);
            }
        }
    }

    /// Maps samples below `thr` to black (0) and all others, including
    /// those exactly equal to `thr`, to white (`maxval`).
    pub fn threshold(&mut self, thr: u8) {
        let maxval = self.maxval();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let value = self.get(x, y);
                self.set(x, y, if value < thr { 0 } else { maxval });
            }
        }
    }

    /// Scales every sample by `factor`, rounding half-up and saturating
    /// at `maxval`.
    ///
    /// Brightens for `factor > 1.0`, darkens for `factor < 1.0`.
    /// Saturating at `maxval` rather than 255 keeps low-maxval images
    /// inside their declared range; the two agree when `maxval == 255`.
    ///
    /// # Panics
    /// Panics if `factor` is negative.
    pub fn brighten(&mut self, factor: f64) {
        assert!(factor >= 0.0, "brighten factor must be non-negative");
        let maxval = self.maxval();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let scaled = (f64::from(self.get(x, y)) * factor + 0.5).floor();
                let value = if scaled > f64::from(maxval) {
                    maxval
                } else {
                    scaled as u8
                };
                self.set(x, y, value);
            }
        }
    }
}
