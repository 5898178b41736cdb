//! Image operations, implemented as [`GrayImage`] methods.
//!
//! Pointwise and compositing operations mutate in place; geometric
//! transforms and the blur scratch allocate fresh buffers.
//!
//! [`GrayImage`]: crate::image::GrayImage

mod compose;
mod filter;
mod geometry;
mod pointwise;
