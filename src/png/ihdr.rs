use crate::EngraveError;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = EngraveError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(EngraveError::Parse),
    })
  }
}

/// Image Header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// if the image data is stored interlaced.
  ///
  /// this encoder never writes interlaced data, and please don't make new
  /// interlaced images elsewhere either, they're terrible.
  pub is_interlaced: bool,
}
impl IHDR {
  /// The header for a non-interlaced RGBA image at 8 bits per channel.
  ///
  /// This is the one and only pixel layout the encoder writes.
  #[inline]
  #[must_use]
  pub const fn rgba8(width: u32, height: u32) -> Self {
    Self { width, height, bit_depth: 8, color_type: PngColorType::RGBA, is_interlaced: false }
  }

  /// Serializes into the fixed 13 byte `IHDR` chunk payload.
  ///
  /// Compression method and filter method are always 0, those are the only
  /// values the PNG spec defines.
  #[inline]
  #[must_use]
  pub const fn to_ihdr_payload(&self) -> [u8; 13] {
    let [w0, w1, w2, w3] = self.width.to_be_bytes();
    let [h0, h1, h2, h3] = self.height.to_be_bytes();
    [
      w0,
      w1,
      w2,
      w3,
      h0,
      h1,
      h2,
      h3,
      self.bit_depth,
      self.color_type as u8,
      0,
      0,
      self.is_interlaced as u8,
    ]
  }

  /// bits for each pixel in the image data.
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> usize {
    (self.bit_depth as usize) * self.color_type.channel_count()
  }

  /// bytes for each filtered scanline: a filter byte (1) + pixel data.
  ///
  /// When pixels are less than 8 bits per channel it's possible to end up
  /// with partial bytes on the end, so we must round up.
  #[inline]
  #[must_use]
  pub const fn bytes_per_filterline(&self) -> usize {
    1 + ((self.bits_per_pixel() * (self.width as usize)) + 7) / 8
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = EngraveError;
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, _compression_method, _filter_method, interlace_method] => {
        Ok(Self {
          width: u32::from_be_bytes([*w0, *w1, *w2, *w3]),
          height: u32::from_be_bytes([*h0, *h1, *h2, *h3]),
          bit_depth: match *color_type {
            0 if [1, 2, 4, 8, 16].contains(bit_depth) => *bit_depth,
            2 if [8, 16].contains(bit_depth) => *bit_depth,
            3 if [1, 2, 4, 8].contains(bit_depth) => *bit_depth,
            4 if [8, 16].contains(bit_depth) => *bit_depth,
            6 if [8, 16].contains(bit_depth) => *bit_depth,
            _ => return Err(EngraveError::Parse),
          },
          color_type: PngColorType::try_from(*color_type)?,
          is_interlaced: match interlace_method {
            0 => false,
            1 => true,
            _ => return Err(EngraveError::Parse),
          },
        })
      }
      _ => Err(EngraveError::Parse),
    }
  }
}

#[test]
fn test_ihdr_payload_round_trip() {
  let ihdr = IHDR::rgba8(48, 48);
  let payload = ihdr.to_ihdr_payload();
  assert_eq!(payload.len(), 13);
  assert_eq!(IHDR::try_from(payload.as_slice()), Ok(ihdr));
}
