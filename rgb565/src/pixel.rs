use modular_bitfield::prelude::*;

/// An 8-bit per channel RGB pixel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pixel {
  /// Red channel value.
  pub r: u8,
  /// Green channel value.
  pub g: u8,
  /// Blue channel value.
  pub b: u8,
}

impl Pixel {
  pub fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Returns the pixel with every bit an RGB565 word can't hold cleared. This
  /// is exactly what survives encoding followed by decoding.
  pub fn truncated(&self) -> Self {
    Self { r: self.r & 0xf8, g: self.g & 0xfc, b: self.b & 0xf8 }
  }
}

/// A packed 16-bit RGB565 pixel.
///
/// Fields are laid out from the least significant bit, so blue occupies bits
/// 0-4, green bits 5-10 and red bits 11-15. The byte representation is
/// little-endian, matching the raw stream layout.
#[bitfield]
#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb565 {
  b: B5,
  g: B6,
  r: B5,
}

impl Rgb565 {
  /// Reads a word from its two little-endian bytes.
  pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
    Self::from_bytes(bytes)
  }

  /// Returns the word as two little-endian bytes, low byte first.
  pub fn to_le_bytes(self) -> [u8; 2] {
    self.into_bytes()
  }

  /// The 5-bit red field.
  pub fn red(&self) -> u8 {
    self.r()
  }

  /// The 6-bit green field.
  pub fn green(&self) -> u8 {
    self.g()
  }

  /// The 5-bit blue field.
  pub fn blue(&self) -> u8 {
    self.b()
  }
}

// Keeps the top 5 bits of red and blue and the top 6 bits of green.
impl From<Pixel> for Rgb565 {
  fn from(pixel: Pixel) -> Self {
    Rgb565::new()
      .with_r(pixel.r >> 3)
      .with_g(pixel.g >> 2)
      .with_b(pixel.b >> 3)
  }
}

// Shifts each field back into the high bits of an 8-bit channel. The low bits
// stay zero, no attempt is made to replicate them.
impl From<Rgb565> for Pixel {
  fn from(word: Rgb565) -> Self {
    Pixel {
      r: word.r() << 3,
      g: word.g() << 2,
      b: word.b() << 3,
    }
  }
}
