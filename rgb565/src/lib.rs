//! This crate implements an encoder and decoder for raw RGB565 pixel streams,
//! the 16 bits per pixel format commonly fed to small embedded displays.
//!
//! A raw stream is nothing but pixel words. Each pixel packs 5 bits of red,
//! 6 bits of green and 5 bits of blue into a little-endian `u16`, pixels are
//! stored in row-major order, and there is no header, so the image's width
//! and height always have to be supplied through an [`ImageMeta`].
//!
//! The two primary exports are the `encode_image` and `decode_image`
//! functions. Both accept a generic trait bound of `std::io::Read` for the
//! image source, and `std::io::Write` for the image destination. The
//! `encode_pixels` and `decode_pixels` functions do the same work on
//! in-memory buffers.
//!
//! Conversion is lossy: encoding drops the low 3 bits of red and blue and the
//! low 2 bits of green. Decoding leaves those bits zeroed.
//!
//! To keep this crate simple, it does not decode or encode container formats
//! such as PNG or JPEG. Decode those into interleaved 8-bit RGB first.
//!
//! # In-memory encode example
//!
//! ```rust
//! use rgb565::{encode_image, ImageMeta};
//!
//! // A 1x1 image made up of a single pure red pixel.
//! let image_source = vec![255, 0, 0];
//!
//! // Buffer to write the raw RGB565 stream to.
//! let mut image_destination = Vec::new();
//!
//! let image_meta = ImageMeta::new(1, 1).expect("Invalid dimensions");
//!
//! match encode_image(image_source.as_slice(), &mut image_destination, &image_meta) {
//!   Ok(()) => {
//!     // Pure red is the word 0xf800, stored low byte first.
//!     assert_eq!(image_destination, vec![0x00, 0xf8]);
//!   }
//!   Err(e) => {
//!     // See `error.rs` for all possible errors.
//!     panic!("{}", e);
//!   }
//! }
//! ```
//!
//! # In-memory decode example
//!
//! ```rust
//! use rgb565::{decode_pixels, Error, ImageMeta};
//!
//! let image_meta = ImageMeta::new(2, 1).expect("Invalid dimensions");
//!
//! // Two white pixels decode with their low bits cleared.
//! let pixels = decode_pixels(&[0xff, 0xff, 0xff, 0xff], &image_meta).expect("Failed to decode");
//! assert_eq!(pixels, vec![248, 252, 248, 248, 252, 248]);
//!
//! // A stream that is too short for the dimensions is rejected.
//! match decode_pixels(&[0xff, 0xff, 0xff], &image_meta) {
//!   Err(Error::InsufficientData { expected, actual }) => {
//!     assert_eq!((expected, actual), (4, 3));
//!   }
//!   other => panic!("unexpected result {:?}", other),
//! }
//! ```
//!

pub use crate::decode::{decode_image, decode_pixel, decode_pixels};
pub use crate::encode::{encode_image, encode_pixel, encode_pixels};
pub use crate::error::Error;
pub use crate::meta::{
  ImageMeta, DEFAULT_HEIGHT, DEFAULT_WIDTH, RGB565_BYTES_PER_PIXEL, RGB_CHANNELS,
};
pub use crate::pixel::{Pixel, Rgb565};

mod decode;
mod encode;
mod error;
mod meta;
mod pixel;
