//! Raw PGM (P5) loading and saving.
//!
//! Only the 8-bit binary graymap flavor is handled: a `P5` signature,
//! ASCII width/height/maxval tokens separated by whitespace (with `#`
//! comments allowed between tokens), exactly one whitespace byte, then
//! `width * height` raw samples. See the netpbm PGM specification.
//!
//! Saving may leave a partial, invalid file behind on failure; callers
//! that care should write to a temporary path and rename.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use crate::image::GrayImage;
use crate::instr::PixelCounters;
use crate::trace::trace_event;
use crate::util::{GrayMapError, GrayMapResult};

/// Loads a raw PGM file into a new image.
pub fn load_pgm<P: AsRef<Path>>(path: P) -> GrayMapResult<GrayImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| GrayMapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pgm(&bytes)
}

/// Loads a raw PGM file, attaching `sink` to the resulting image and
/// recording one write per pixel transferred.
pub fn load_pgm_counted<P: AsRef<Path>>(
    path: P,
    sink: Rc<PixelCounters>,
) -> GrayMapResult<GrayImage> {
    let mut img = load_pgm(path)?;
    sink.record_writes(img.sample_count() as u64);
    img.attach_counters(sink);
    Ok(img)
}

/// Saves an image as a raw PGM file.
///
/// Records one read per pixel on the image's attached counter sink.
pub fn save_pgm<P: AsRef<Path>>(img: &GrayImage, path: P) -> GrayMapResult<()> {
    let path = path.as_ref();
    let io_err = |source| GrayMapError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(io_err)?;
    write!(file, "P5\n{} {}\n{}\n", img.width(), img.height(), img.maxval()).map_err(io_err)?;
    file.write_all(img.as_raw()).map_err(io_err)?;

    img.count_reads(img.sample_count() as u64);
    trace_event!("pgm_save", width = img.width(), height = img.height());
    Ok(())
}

fn parse_pgm(bytes: &[u8]) -> GrayMapResult<GrayImage> {
    let mut cur = Cursor { bytes, pos: 0 };
    if !cur.eat(b"P5") {
        return Err(GrayMapError::BadFormat {
            reason: "missing P5 signature",
        });
    }

    let width = cur.next_uint().ok_or(GrayMapError::BadFormat {
        reason: "invalid width",
    })?;
    let height = cur.next_uint().ok_or(GrayMapError::BadFormat {
        reason: "invalid height",
    })?;
    let maxval = cur.next_uint().ok_or(GrayMapError::BadFormat {
        reason: "invalid maxval",
    })?;
    if maxval == 0 || maxval > 255 {
        return Err(GrayMapError::InvalidMaxval {
            maxval: maxval.min(u64::from(u32::MAX)) as u32,
        });
    }
    if !cur.eat_single_space() {
        return Err(GrayMapError::BadFormat {
            reason: "whitespace expected after maxval",
        });
    }

    let width = usize::try_from(width).map_err(|_| GrayMapError::BadFormat {
        reason: "invalid width",
    })?;
    let height = usize::try_from(height).map_err(|_| GrayMapError::BadFormat {
        reason: "invalid height",
    })?;
    let expected = width
        .checked_mul(height)
        .ok_or(GrayMapError::InvalidDimensions { width, height })?;

    let rest = &cur.bytes[cur.pos..];
    if rest.len() < expected {
        return Err(GrayMapError::TruncatedPixels {
            expected,
            got: rest.len(),
        });
    }

    trace_event!("pgm_load", width = width, height = height);
    GrayImage::from_raw(rest[..expected].to_vec(), width, height, maxval as u8)
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, tag: &[u8]) -> bool {
        if self.bytes[self.pos..].starts_with(tag) {
            self.pos += tag.len();
            true
        } else {
            false
        }
    }

    /// Skips whitespace and `#` comments (which run to end of line,
    /// inclusive).
    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(c) = self.peek() {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Reads an ASCII unsigned integer after skipping separators.
    fn next_uint(&mut self) -> Option<u64> {
        self.skip_separators();
        let start = self.pos;
        let mut value: u64 = 0;
        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
            self.pos += 1;
        }
        if self.pos == start {
            None
        } else {
            Some(value)
        }
    }

    /// Consumes exactly one whitespace byte.
    fn eat_single_space(&mut self) -> bool {
        match self.peek() {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }
}
