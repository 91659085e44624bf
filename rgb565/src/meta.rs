use crate::error::Error;

/// Number of bytes per pixel in an interleaved 8-bit RGB grid.
pub const RGB_CHANNELS: usize = 3;
/// Number of bytes per pixel in a raw RGB565 stream.
pub const RGB565_BYTES_PER_PIXEL: usize = 2;
/// Width used when the caller doesn't supply one.
pub const DEFAULT_WIDTH: u32 = 160;
/// Height used when the caller doesn't supply one.
pub const DEFAULT_HEIGHT: u32 = 120;

/// The dimensions of an image.
///
/// Neither the raw RGB565 stream nor the RGB grid carry their own width and
/// height, so every conversion needs one of these supplied by the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ImageMeta {
  /// The image's width.
  pub width: u32,
  /// The image's height.
  pub height: u32,
}

impl Default for ImageMeta {
  fn default() -> Self {
    Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
  }
}

impl ImageMeta {
  /// Creates a validated `ImageMeta`. Fails with `Error::InvalidDimensions`
  /// when either dimension is zero or the image's byte length can't be
  /// represented as a `usize`.
  pub fn new(width: u32, height: u32) -> Result<Self, Error> {
    let meta = Self { width, height };
    meta.validate()?;
    Ok(meta)
  }

  /// Returns the total number of pixels that make up the image.
  pub fn num_pixels(&self) -> usize {
    self.width as usize * self.height as usize
  }

  /// Returns the exact byte length of the image as a raw RGB565 stream.
  pub fn raw_len(&self) -> usize {
    self.num_pixels() * RGB565_BYTES_PER_PIXEL
  }

  /// Returns the exact byte length of the image as an interleaved RGB grid.
  pub fn rgb_len(&self) -> usize {
    self.num_pixels() * RGB_CHANNELS
  }

  // Checks that both dimensions are positive and that the largest buffer
  // derived from them fits in a `usize`. Every encode and decode entry point
  // calls this, since the fields are public.
  pub(crate) fn validate(&self) -> Result<(), Error> {
    let invalid = Error::InvalidDimensions { width: self.width, height: self.height };

    if self.width == 0 || self.height == 0 {
      return Err(invalid);
    }

    (self.width as usize)
      .checked_mul(self.height as usize)
      .and_then(|pixels| pixels.checked_mul(RGB_CHANNELS))
      .map(|_| ())
      .ok_or(invalid)
  }

  // Compares the length of a source buffer against the `expected` length.
  pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), Error> {
    if actual < expected {
      return Err(Error::InsufficientData { expected, actual });
    }

    if actual > expected {
      return Err(Error::TrailingData { expected, actual });
    }

    Ok(())
  }
}
