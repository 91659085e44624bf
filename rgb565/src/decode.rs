use std::io;

use log::debug;

use crate::encode::read_source;
use crate::error::Error;
use crate::meta::{ImageMeta, RGB565_BYTES_PER_PIXEL, RGB_CHANNELS};
use crate::pixel::{Pixel, Rgb565};

/// Decodes a raw RGB565 stream into interleaved 8-bit RGB pixel data, which
/// is written to the provided `writer`.
///
/// This function supports reading and writing to in-memory structures or IO
/// streams by accepting a generic trait bound of `std::io::Read` for the raw
/// stream, and `std::io::Write` for the decoded pixel data destination.
///
/// The raw stream carries no dimensions of its own. It must hold exactly
/// `2 * width * height` bytes for the given `meta`, anything else is reported
/// as `Error::InsufficientData` or `Error::TrailingData`.
pub fn decode_image<R: io::Read, W: io::Write>(
  reader: R,
  mut writer: W,
  meta: &ImageMeta,
) -> Result<(), Error> {
  meta.validate()?;

  let source = read_source(reader, meta.raw_len())?;
  let pixels = decode_pixels(&source, meta)?;

  writer.write_all(&pixels)?;
  writer.flush()?;

  Ok(())
}

/// Decodes an in-memory raw RGB565 stream into a row-major grid of
/// interleaved 8-bit RGB pixels, `3 * width * height` bytes long.
pub fn decode_pixels(raw: &[u8], meta: &ImageMeta) -> Result<Vec<u8>, Error> {
  meta.validate()?;
  ImageMeta::check_len(meta.raw_len(), raw.len())?;

  debug!("decoding {} RGB565 bytes into {}x{} image", raw.len(), meta.width, meta.height);

  let width = meta.width as usize;
  let height = meta.height as usize;
  let mut pixels = Vec::with_capacity(meta.rgb_len());
  let mut cursor = 0;

  for _y in 0..height {
    for _x in 0..width {
      let pixel = decode_pixel(read_word(raw, cursor)?);
      cursor += RGB565_BYTES_PER_PIXEL;

      pixels.extend_from_slice(&[pixel.r, pixel.g, pixel.b]);
    }
  }

  debug_assert_eq!(pixels.len(), meta.num_pixels() * RGB_CHANNELS);

  Ok(pixels)
}

/// Unpacks two little-endian RGB565 bytes into an 8-bit RGB pixel.
pub fn decode_pixel(bytes: [u8; RGB565_BYTES_PER_PIXEL]) -> Pixel {
  Pixel::from(Rgb565::from_le_bytes(bytes))
}

// Bounds-checked read of the word starting at `cursor`.
fn read_word(raw: &[u8], cursor: usize) -> Result<[u8; RGB565_BYTES_PER_PIXEL], Error> {
  match raw.get(cursor..cursor + RGB565_BYTES_PER_PIXEL) {
    Some(&[lo, hi]) => Ok([lo, hi]),
    _ => Err(Error::InsufficientData {
      expected: cursor + RGB565_BYTES_PER_PIXEL,
      actual: raw.len(),
    }),
  }
}
