//! Pixel-access instrumentation.
//!
//! Reads and writes through the pixel accessors can be tallied into a
//! [`PixelCounters`] sink for complexity measurements. The sink is an
//! explicit object with a caller-controlled lifecycle: create one, attach
//! it to the images of interest, read or reset it between operations.
//! Counting is purely observational; no operation ever consults the sink.

use std::cell::Cell;
use std::rc::Rc;

/// Tally of pixel reads and writes.
///
/// Shared between images through `Rc`; the engine is single-threaded by
/// contract, so plain `Cell` tallies suffice. Images derived from a
/// counted image (rotate, mirror, crop, the blur scratch) inherit the
/// same sink.
#[derive(Debug, Default)]
pub struct PixelCounters {
    reads: Cell<u64>,
    writes: Cell<u64>,
}

impl PixelCounters {
    /// Creates a zeroed sink, wrapped for sharing between images.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Adds `n` pixel reads to the tally.
    pub fn record_reads(&self, n: u64) {
        self.reads.set(self.reads.get() + n);
    }

    /// Adds `n` pixel writes to the tally.
    pub fn record_writes(&self, n: u64) {
        self.writes.set(self.writes.get() + n);
    }

    /// Pixel reads recorded since creation or the last reset.
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }

    /// Pixel writes recorded since creation or the last reset.
    pub fn writes(&self) -> u64 {
        self.writes.get()
    }

    /// Total pixel accesses.
    pub fn total(&self) -> u64 {
        self.reads.get() + self.writes.get()
    }

    /// Zeroes both tallies.
    pub fn reset(&self) {
        self.reads.set(0);
        self.writes.set(0);
    }
}
