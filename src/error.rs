use core::num::TryFromIntError;

/// An error from the `engrave` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngraveError {
  /// Failed to parse the data given.
  Parse,

  /// The allocator couldn't give us enough space.
  #[cfg(feature = "alloc")]
  Alloc,

  /// The requested width and/or height of the image is 0.
  WidthOrHeightZero,

  /// A checked math operation failed.
  ///
  /// Generally this means the image dimensions were so large that a buffer
  /// size or chunk length overflowed its integer type.
  CheckedMath,
}
#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for EngraveError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
impl From<TryFromIntError> for EngraveError {
  #[inline]
  fn from(_: TryFromIntError) -> Self {
    Self::CheckedMath
  }
}
