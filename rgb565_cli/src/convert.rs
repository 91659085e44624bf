//! File-level conversions. Container formats go through the `image` crate,
//! pixel packing goes through `rgb565`.

use std::fs;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbImage;
use log::{debug, info};
use rgb565::{decode_pixels, encode_pixels, ImageMeta};

use crate::error::Error;

/// Reads the image at `input`, fits it to `meta` and writes it to `output` as
/// a raw RGB565 stream.
pub fn encode_file(input: &Path, output: &Path, meta: &ImageMeta) -> Result<(), Error> {
  check_alloc(meta)?;

  let source = image::open(input).map_err(|source| Error::Image {
    path: input.to_path_buf(),
    source,
  })?;

  info!(
    "read {} ({}x{}, {:?})",
    input.display(),
    source.width(),
    source.height(),
    source.color()
  );

  let rgb = fit_to(source.to_rgb8(), meta);
  let raw = encode_pixels(rgb.as_raw(), meta)?;

  fs::write(output, &raw).map_err(|source| Error::Io {
    path: output.to_path_buf(),
    source,
  })?;

  info!("wrote {} bytes to {}", raw.len(), output.display());

  Ok(())
}

/// Reads the raw RGB565 stream at `input` and saves it to `output`, in the
/// container format matching the output's extension.
pub fn decode_file(input: &Path, output: &Path, meta: &ImageMeta) -> Result<(), Error> {
  check_alloc(meta)?;

  let raw = fs::read(input).map_err(|source| Error::Io {
    path: input.to_path_buf(),
    source,
  })?;

  info!("read {} bytes from {}", raw.len(), input.display());

  let pixels = decode_pixels(&raw, meta)?;
  // `decode_pixels` returns exactly `rgb_len` bytes, so this only fails if
  // that contract is broken.
  let shortfall = rgb565::Error::InsufficientData { expected: meta.rgb_len(), actual: pixels.len() };
  let image = RgbImage::from_raw(meta.width, meta.height, pixels).ok_or(shortfall)?;

  image.save(output).map_err(|source| Error::Image {
    path: output.to_path_buf(),
    source,
  })?;

  info!("wrote {}", output.display());

  Ok(())
}

// Rejects dimensions whose RGB grid would exceed the `image` crate's default
// allocation limit. Resizing and container encoding allocate at least that
// much, and an allocation failure aborts rather than returning an error.
fn check_alloc(meta: &ImageMeta) -> Result<(), rgb565::Error> {
  let max_alloc = image::Limits::default().max_alloc.unwrap_or(u64::MAX);

  if meta.rgb_len() as u64 > max_alloc {
    return Err(rgb565::Error::InvalidDimensions { width: meta.width, height: meta.height });
  }

  Ok(())
}

// Resizes the image to exactly the requested dimensions with a bicubic filter.
// Images already at the right size are returned untouched.
fn fit_to(image: RgbImage, meta: &ImageMeta) -> RgbImage {
  if image.dimensions() == (meta.width, meta.height) {
    return image;
  }

  debug!(
    "resizing {}x{} to {}x{}",
    image.width(),
    image.height(),
    meta.width,
    meta.height
  );

  imageops::resize(&image, meta.width, meta.height, FilterType::CatmullRom)
}
