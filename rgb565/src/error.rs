use std::error;
use std::fmt;
use std::io;

/// An enumeration of all error values this crate may produce.
pub enum Error {
  /// The image's width or height is zero, or the image is too large for its
  /// byte length to be addressed on this platform (or, in callers that cap
  /// memory use, too large for that cap).
  InvalidDimensions { width: u32, height: u32 },
  /// The image source holds fewer bytes than the image's dimensions require.
  /// This almost always means the width or height does not belong to the
  /// source, since neither format stores its own dimensions.
  InsufficientData { expected: usize, actual: usize },
  /// The image source holds more bytes than the image's dimensions require.
  TrailingData { expected: usize, actual: usize },
  /// Any `std::io::Error` that occurs during decoding or encoding. Typically
  /// these will arise from problems with reading an image source or writing to
  /// an image destination.
  IoError(io::Error),
}

impl From<io::Error> for Error {
  fn from(io_err: io::Error) -> Self {
    Error::IoError(io_err)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::InvalidDimensions { width, height } => {
        write!(f, "invalid image dimensions {}x{}", width, height)
      }
      Error::InsufficientData { expected, actual } => {
        write!(
          f,
          "insufficient image data, expected {} bytes but found {} (check the width and height)",
          expected, actual
        )
      }
      Error::TrailingData { expected, actual } => {
        write!(
          f,
          "unexpected trailing image data, expected {} bytes but found {} (check the width and height)",
          expected, actual
        )
      }
      Error::IoError(io_err) => {
        write!(f, "{}", io_err)
      }
    }
  }
}

impl fmt::Debug for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self)
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      Error::IoError(io_err) => Some(io_err),
      _ => None,
    }
  }
}

#[cfg(test)]
impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (
        Error::InvalidDimensions { width: a_w, height: a_h },
        Error::InvalidDimensions { width: b_w, height: b_h },
      ) => a_w == b_w && a_h == b_h,
      (
        Error::InsufficientData { expected: a_e, actual: a_a },
        Error::InsufficientData { expected: b_e, actual: b_a },
      ) => a_e == b_e && a_a == b_a,
      (
        Error::TrailingData { expected: a_e, actual: a_a },
        Error::TrailingData { expected: b_e, actual: b_a },
      ) => a_e == b_e && a_a == b_a,
      (Error::IoError(..), Error::IoError(..)) => true,
      _ => false,
    }
  }
}
