use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use image::ImageError;

/// Everything that can end a conversion run.
pub enum Error {
  /// The raw stream or pixel grid didn't fit the requested dimensions.
  Codec(rgb565::Error),
  /// The source image couldn't be read or decoded, or the destination image
  /// couldn't be encoded or written.
  Image { path: PathBuf, source: ImageError },
  /// Reading or writing a raw stream failed.
  Io { path: PathBuf, source: io::Error },
}

impl From<rgb565::Error> for Error {
  fn from(codec_err: rgb565::Error) -> Self {
    Error::Codec(codec_err)
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Codec(codec_err) => {
        write!(f, "{}", codec_err)
      }
      Error::Image { path, source } => {
        write!(f, "{}: {}", path.display(), source)
      }
      Error::Io { path, source } => {
        write!(f, "{}: {}", path.display(), source)
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
      Error::Codec(codec_err) => Some(codec_err),
      Error::Image { source, .. } => Some(source),
      Error::Io { source, .. } => Some(source),
    }
  }
}
