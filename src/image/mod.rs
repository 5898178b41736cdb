//! Owned 8-bit grayscale pixel buffers.
//!
//! A [`GrayImage`] owns a contiguous raster-scan buffer of gray samples:
//! row-major, top row first, so sample `(x, y)` lives at index
//! `y * width + x`. Every sample lies in `[0, maxval]`, where `maxval` is
//! the gray level rendered as pure white. Dimensions and maxval are fixed
//! for the lifetime of the value; pointwise and compositing operations
//! mutate samples in place, while geometric transforms return freshly
//! allocated images.

use std::rc::Rc;

use crate::instr::PixelCounters;
use crate::util::{GrayMapError, GrayMapResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod pgm;

/// Owned contiguous grayscale image buffer.
#[derive(Clone, Debug)]
pub struct GrayImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
    maxval: u8,
    counters: Option<Rc<PixelCounters>>,
}

/// Minimum and maximum gray level found in an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelStats {
    pub min: u8,
    pub max: u8,
}

impl GrayImage {
    /// Creates a new all-black image.
    ///
    /// `maxval` is the gray level for pure white and must be nonzero.
    /// Zero-area images are permitted. Fails with
    /// [`GrayMapError::Allocation`] if sample storage cannot be obtained;
    /// no partial image is returned.
    pub fn new(width: usize, height: usize, maxval: u8) -> GrayMapResult<Self> {
        if maxval == 0 {
            return Err(GrayMapError::InvalidMaxval { maxval: 0 });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GrayMapError::InvalidDimensions { width, height })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GrayMapError::Allocation {
                width,
                height,
                bytes: len,
            })?;
        data.resize(len, 0);
        Ok(Self {
            data,
            width,
            height,
            maxval,
            counters: None,
        })
    }

    /// Wraps an existing raster-scan sample buffer.
    ///
    /// The buffer length must equal `width * height` and every sample must
    /// lie in `[0, maxval]`.
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize, maxval: u8) -> GrayMapResult<Self> {
        if maxval == 0 {
            return Err(GrayMapError::InvalidMaxval { maxval: 0 });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(GrayMapError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(GrayMapError::BufferSizeMismatch {
                width,
                height,
                expected,
                got: data.len(),
            });
        }
        if let Some(&value) = data.iter().find(|&&v| v > maxval) {
            return Err(GrayMapError::SampleOutOfRange { value, maxval });
        }
        Ok(Self {
            data,
            width,
            height,
            maxval,
            counters: None,
        })
    }

    /// Creates a black image with this image's maxval and counter sink.
    /// Used for geometric results and the blur scratch buffer.
    pub(crate) fn new_derived(&self, width: usize, height: usize) -> GrayMapResult<Self> {
        let mut img = Self::new(width, height, self.maxval)?;
        img.counters = self.counters.clone();
        Ok(img)
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the gray level rendered as pure white.
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    /// Returns the number of samples (`width * height`).
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Returns true for a zero-area image.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing raster-scan sample slice.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Returns a contiguous slice for row `y`, if it exists.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// Attaches a counter sink; subsequent pixel accesses are tallied.
    pub fn attach_counters(&mut self, sink: Rc<PixelCounters>) {
        self.counters = Some(sink);
    }

    /// Detaches the counter sink, returning it if one was attached.
    pub fn detach_counters(&mut self) -> Option<Rc<PixelCounters>> {
        self.counters.take()
    }

    pub(crate) fn count_reads(&self, n: u64) {
        if let Some(sink) = &self.counters {
            sink.record_reads(n);
        }
    }

    pub(crate) fn count_writes(&self, n: u64) {
        if let Some(sink) = &self.counters {
            sink.record_writes(n);
        }
    }

    /// Returns true iff `(x, y)` lies inside the image.
    pub fn is_valid_pos(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns true iff the rectangle `(x, y, w, h)` lies fully inside the
    /// image. Zero-sized rectangles anchored on the far edge are valid.
    pub fn is_valid_rect(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        let Some(end_x) = x.checked_add(w) else {
            return false;
        };
        let Some(end_y) = y.checked_add(h) else {
            return false;
        };
        end_x <= self.width && end_y <= self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the gray level at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image (caller contract).
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(
            self.is_valid_pos(x, y),
            "pixel read at ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        self.count_reads(1);
        self.data[self.index(x, y)]
    }

    /// Sets the gray level at `(x, y)`.
    ///
    /// Callers are trusted to pass a pre-saturated `value <= maxval`; the
    /// buffer does not re-clamp.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the image (caller contract).
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        assert!(
            self.is_valid_pos(x, y),
            "pixel write at ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        debug_assert!(
            value <= self.maxval,
            "sample {value} exceeds maxval {}",
            self.maxval
        );
        self.count_writes(1);
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Returns the minimum and maximum gray level over the whole buffer,
    /// or `None` for a zero-area image.
    pub fn stats(&self) -> Option<PixelStats> {
        if self.data.is_empty() {
            return None;
        }
        let mut min = self.maxval;
        let mut max = 0;
        for &value in &self.data {
            min = min.min(value);
            max = max.max(value);
        }
        self.count_reads(self.data.len() as u64);
        Some(PixelStats { min, max })
    }
}

impl PartialEq for GrayImage {
    /// Equality over geometry, maxval and samples; counter sinks are
    /// ignored.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.maxval == other.maxval
            && self.data == other.data
    }
}

impl Eq for GrayImage {}
