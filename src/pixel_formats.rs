//! Module for pixel formats.
//!
//! The encoder currently only writes PNG color type 6 at bit depth 8, so the
//! only format here is [`RGBA8`]. Other formats might be added in the future
//! as more output modes are added.

use bytemuck::{Pod, Zeroable};

/// An 8-bits per channel RGBA pixel.
///
/// The `Default` value is fully transparent black, which is what "outside the
/// shape" means for every sampler that feeds the encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGBA8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

unsafe impl Zeroable for RGBA8 {}
unsafe impl Pod for RGBA8 {}
