use core::fmt::{Debug, Write};

use super::png_crc;

/// The 4 byte ASCII tag that names a PNG chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub [u8; 4]);
impl PngChunkTy {
  /// Image Header.
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data.
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End.
  pub const IEND: Self = Self(*b"IEND");

  /// The tag as raw bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
}
impl Debug for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // tags should be ascii, but nothing enforces that, so cast per byte.
    f.write_char('\"')?;
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('\"')?;
    Ok(())
  }
}

/// An unparsed chunk from a PNG data stream.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  ty: PngChunkTy,
  data: &'b [u8],
  declared_crc: u32,
}
impl Debug for PngRawChunk<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl<'b> PngRawChunk<'b> {
  /// The chunk's type tag.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> PngChunkTy {
    self.ty
  }
  /// The chunk's payload bytes.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC value the chunk's framing claims.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC of the chunk as it actually is.
  ///
  /// When this doesn't match [`declared_crc`](Self::declared_crc) the chunk
  /// was corrupted somewhere between the encoder and here.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    png_crc(self.ty.0.iter().copied().chain(self.data.iter().copied()))
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Truncated or garbage input just ends the iteration early. No combination
/// of input bytes will make this panic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngRawChunkIter<'b>(&'b [u8]);
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, it will skip the PNG signature automatically.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngRawChunk<'b>;
  fn next(&mut self) -> Option<Self::Item> {
    let chunk_len: u32 = if self.0.len() >= 4 {
      let (len_bytes, rest) = self.0.split_at(4);
      self.0 = rest;
      u32::from_be_bytes(len_bytes.try_into().unwrap())
    } else {
      return None;
    };
    let ty: PngChunkTy = if self.0.len() >= 4 {
      let (ty_bytes, rest) = self.0.split_at(4);
      self.0 = rest;
      PngChunkTy(ty_bytes.try_into().unwrap())
    } else {
      return None;
    };
    let data: &'b [u8] = if self.0.len() >= chunk_len as usize {
      let (data, rest) = self.0.split_at(chunk_len as usize);
      self.0 = rest;
      data
    } else {
      return None;
    };
    let declared_crc: u32 = if self.0.len() >= 4 {
      let (decl_bytes, rest) = self.0.split_at(4);
      self.0 = rest;
      u32::from_be_bytes(decl_bytes.try_into().unwrap())
    } else {
      return None;
    };
    Some(PngRawChunk { ty, data, declared_crc })
  }
}

/// Appends one framed chunk to `out`: length, type, payload, CRC.
///
/// The CRC covers the type and payload but not the length.
#[cfg(feature = "alloc")]
pub(crate) fn push_chunk(
  out: &mut alloc::vec::Vec<u8>, ty: PngChunkTy, payload: &[u8],
) -> Result<(), crate::EngraveError> {
  let len = u32::try_from(payload.len())?;
  out.extend_from_slice(&len.to_be_bytes());
  out.extend_from_slice(ty.as_bytes());
  out.extend_from_slice(payload);
  let crc = png_crc(ty.as_bytes().iter().copied().chain(payload.iter().copied()));
  out.extend_from_slice(&crc.to_be_bytes());
  Ok(())
}
