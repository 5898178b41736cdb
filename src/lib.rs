//! Graymap is an in-memory 8-bit grayscale raster engine.
//!
//! A [`GrayImage`] owns a raster-scan buffer of gray samples in
//! `[0, maxval]`. On top of it the crate provides in-place pointwise
//! transforms (negate, threshold, brighten), geometric transforms
//! (rotate, mirror, crop), compositing (paste, blend), brute-force
//! sub-image search, a clipped-window mean blur, and raw PGM (P5)
//! load/save. Pixel accesses can be tallied through an explicit
//! [`PixelCounters`] sink, and the optional `tracing` feature emits spans
//! and events for the heavier operations.

pub mod image;
pub mod instr;
pub mod ops;
pub mod search;
mod trace;
pub mod util;

pub use image::pgm::{load_pgm, load_pgm_counted, save_pgm};
pub use image::{GrayImage, PixelStats};
pub use instr::PixelCounters;
pub use search::{locate, match_at};
pub use util::{GrayMapError, GrayMapResult};
