use std::io::{self, Read};

use log::debug;

use crate::error::Error;
use crate::meta::{ImageMeta, RGB565_BYTES_PER_PIXEL, RGB_CHANNELS};
use crate::pixel::{Pixel, Rgb565};

/// Encodes an image's interleaved 8-bit RGB pixel data into a raw RGB565
/// stream.
///
/// This function supports reading and writing to in-memory structures or IO
/// streams by accepting a generic trait bound of `std::io::Read` for the
/// image's pixel data, and `std::io::Write` for the raw stream's destination.
///
/// The source must hold exactly `3 * width * height` bytes. The whole source
/// is read and converted before anything is written, so a failed conversion
/// leaves the destination untouched.
pub fn encode_image<R: io::Read, W: io::Write>(
  reader: R,
  mut writer: W,
  meta: &ImageMeta,
) -> Result<(), Error> {
  meta.validate()?;

  let source = read_source(reader, meta.rgb_len())?;
  let raw = encode_pixels(&source, meta)?;

  writer.write_all(&raw)?;
  writer.flush()?;

  Ok(())
}

/// Encodes an in-memory grid of interleaved 8-bit RGB pixels, stored in
/// row-major order, into a raw RGB565 stream of exactly `2 * width * height`
/// bytes.
pub fn encode_pixels(pixels: &[u8], meta: &ImageMeta) -> Result<Vec<u8>, Error> {
  meta.validate()?;
  ImageMeta::check_len(meta.rgb_len(), pixels.len())?;

  debug!("encoding {}x{} image into {} RGB565 bytes", meta.width, meta.height, meta.raw_len());

  let width = meta.width as usize;
  let height = meta.height as usize;
  let mut raw = Vec::with_capacity(meta.raw_len());

  for y in 0..height {
    for x in 0..width {
      let offset = (y * width + x) * RGB_CHANNELS;
      let pixel = Pixel {
        r: pixels[offset],
        g: pixels[offset + 1],
        b: pixels[offset + 2],
      };

      raw.extend_from_slice(&encode_pixel(pixel));
    }
  }

  Ok(raw)
}

/// Packs a single pixel into its two little-endian RGB565 bytes.
pub fn encode_pixel(pixel: Pixel) -> [u8; RGB565_BYTES_PER_PIXEL] {
  Rgb565::from(pixel).to_le_bytes()
}

// Reads exactly `expected` bytes from the source. Anything left over is
// drained only to report the source's real length. The buffer grows with the
// bytes actually read, never with the declared dimensions.
pub(crate) fn read_source<R: io::Read>(mut reader: R, expected: usize) -> Result<Vec<u8>, Error> {
  let mut source = Vec::new();

  (&mut reader).take(expected as u64).read_to_end(&mut source)?;
  ImageMeta::check_len(expected, source.len())?;

  let extra = io::copy(&mut reader, &mut io::sink())?;
  ImageMeta::check_len(expected, expected + extra as usize)?;

  Ok(source)
}
