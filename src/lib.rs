#![no_std]
//#![warn(missing_docs)]

//! A crate for image data encoding.
//!
//! Currently developing PNG support. In the future other image formats might
//! also be added.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod pixel_formats;
pub use pixel_formats::*;

mod error;
pub use error::*;

#[cfg(feature = "png")]
pub mod png;
