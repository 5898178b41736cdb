//! Windowed mean filtering.

use crate::image::GrayImage;
use crate::trace::{trace_event, trace_span};
use crate::util::GrayMapResult;

impl GrayImage {
    /// Replaces each sample with the mean of the `(2*dx+1) x (2*dy+1)`
    /// window centered on it.
    ///
    /// Window positions outside the image are excluded from both the sum
    /// and the count, so the window clips at the edges rather than
    /// wrapping or reflecting. The mean rounds half-up:
    /// `(sum + count / 2) / count`. Results are computed into a scratch
    /// image and committed with [`GrayImage::paste`], so every output
    /// sample is a function of the original input only. If the scratch
    /// buffer cannot be allocated, the error propagates and the image is
    /// left unchanged.
    pub fn blur(&mut self, dx: usize, dy: usize) -> GrayMapResult<()> {
        let _guard = trace_span!("blur").entered();
        let mut scratch = self.new_derived(self.width(), self.height())?;

        for y in 0..self.height() {
            for x in 0..self.width() {
                let x0 = x.saturating_sub(dx);
                let y0 = y.saturating_sub(dy);
                let x1 = x.saturating_add(dx).min(self.width() - 1);
                let y1 = y.saturating_add(dy).min(self.height() - 1);

                let mut sum: u64 = 0;
                let mut count: u64 = 0;
                for wy in y0..=y1 {
                    for wx in x0..=x1 {
                        sum += u64::from(self.get(wx, wy));
                        count += 1;
                    }
                }
                // The window always contains (x, y), so count >= 1.
                scratch.set(x, y, ((sum + count / 2) / count) as u8);
            }
        }

        self.paste(0, 0, &scratch);
        trace_event!(
            "blur_done",
            width = self.width(),
            height = self.height(),
            dx = dx,
            dy = dy
        );
        Ok(())
    }
}
