use alloc::vec::Vec;

use bytemuck::bytes_of;

use super::{push_chunk, PngChunkTy, IHDR, PNG_SIGNATURE};
use crate::{EngraveError, RGBA8};

/// Encodes an RGBA image as a complete PNG data stream.
///
/// The `pixel` function is called exactly once for every `(x, y)` with
/// `0 <= x < width` and `0 <= y < height`, in scanline order (top row first,
/// left to right within a row), and its return value becomes that pixel.
///
/// The output is deterministic: the same dimensions and the same pixel values
/// always produce the exact same bytes.
///
/// ## Failure
/// * `WidthOrHeightZero` if either dimension is 0.
/// * `CheckedMath` if the dimensions are so large that a buffer size or chunk
///   length overflows.
/// * `Alloc` if the allocator couldn't give us enough space.
pub fn png_encode_rgba8<F>(width: u32, height: u32, mut pixel: F) -> Result<Vec<u8>, EngraveError>
where
  F: FnMut(u32, u32) -> RGBA8,
{
  if width == 0 || height == 0 {
    return Err(EngraveError::WidthOrHeightZero);
  }
  let ihdr = IHDR::rgba8(width, height);

  let raw_len = ihdr
    .bytes_per_filterline()
    .checked_mul(height as usize)
    .ok_or(EngraveError::CheckedMath)?;
  let mut raw: Vec<u8> = Vec::new();
  raw.try_reserve(raw_len)?;
  for y in 0..height {
    // filter method 0, "None": scanline bytes pass through unchanged.
    raw.push(0);
    for x in 0..width {
      raw.extend_from_slice(bytes_of(&pixel(x, y)));
    }
  }
  debug_assert_eq!(raw.len(), raw_len);

  let level = miniz_oxide::deflate::CompressionLevel::BestCompression as u8;
  let zlib = miniz_oxide::deflate::compress_to_vec_zlib(&raw, level);
  drop(raw);

  let mut out: Vec<u8> = Vec::new();
  // signature + framed IHDR + framed IDAT + framed IEND, where framing is 12
  // bytes of overhead around each payload.
  out.try_reserve(8 + (12 + 13) + (12 + zlib.len()) + 12)?;
  out.extend_from_slice(&PNG_SIGNATURE);
  push_chunk(&mut out, PngChunkTy::IHDR, &ihdr.to_ihdr_payload())?;
  push_chunk(&mut out, PngChunkTy::IDAT, &zlib)?;
  push_chunk(&mut out, PngChunkTy::IEND, &[])?;
  Ok(out)
}

#[test]
fn test_png_encode_rgba8_rejects_zero_dimensions() {
  let f = |_, _| RGBA8::default();
  assert_eq!(png_encode_rgba8(0, 1, f), Err(EngraveError::WidthOrHeightZero));
  assert_eq!(png_encode_rgba8(1, 0, f), Err(EngraveError::WidthOrHeightZero));
  assert_eq!(png_encode_rgba8(0, 0, f), Err(EngraveError::WidthOrHeightZero));
}
