#![forbid(unsafe_code)]

//! Module for working with PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Encoding
//!
//! The whole point of this module is [`png_encode_rgba8`]. You give it a
//! width, a height, and a function from `(x, y)` to [`RGBA8`], and it gives
//! back a complete PNG data stream. The output is always an 8-bit RGBA
//! truecolor-with-alpha image (color type 6), stored without interlacing and
//! with a single `IDAT` chunk.
//!
//! The general format of a PNG is that the information is stored in "chunks"
//! after a fixed 8 byte signature. Each chunk is framed as a big-endian
//! payload length, a 4 byte ASCII chunk type, the payload itself, and a CRC32
//! of the type and payload together. This encoder emits exactly three chunks:
//!
//! * **`IHDR`** - a fixed 13 byte header giving the dimensions and pixel
//!   format.
//! * **`IDAT`** - the pixel data. Each scanline is prefixed with a filter
//!   method byte (always 0 here, "no filtering") and then the whole buffer is
//!   compressed as a single Zlib data stream.
//! * **`IEND`** - an empty chunk marking the end of the file.
//!
//! ## Inspecting The Output
//!
//! The encoder's natural debugging question is "did the framing come out
//! right?", so the chunk walker used to answer it lives here too:
//! [`PngRawChunkIter`] iterates the raw chunks of any PNG byte stream (never
//! panicking, even on garbage input), and [`png_get_header`] pulls the
//! [`IHDR`] back out of an encoded stream. These helpers don't decompress or
//! otherwise decode image data.

mod crc32;
pub(crate) use crc32::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

#[cfg(all(feature = "alloc", feature = "miniz_oxide"))]
mod encode;
#[cfg(all(feature = "alloc", feature = "miniz_oxide"))]
pub use encode::*;

/// The signature that opens every PNG data stream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not*
///   PNG data.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Gets the [IHDR] out of the PNG bytes.
#[inline]
pub fn png_get_header(bytes: &[u8]) -> Option<IHDR> {
  PngRawChunkIter::new(bytes)
    .filter(|raw_chunk| raw_chunk.ty() == PngChunkTy::IHDR)
    .filter_map(|raw_chunk| IHDR::try_from(raw_chunk.data()).ok())
    .next()
}
