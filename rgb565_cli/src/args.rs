//! Command-line argument definitions

use std::path::PathBuf;

use clap::{value_parser, ArgAction, Args, Parser, Subcommand};
use rgb565::{ImageMeta, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "rgb565", version, about = "Convert images to and from raw RGB565 little-endian streams")]
pub struct Cli {
  /// Increase log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides this.
  #[arg(short, long, action = ArgAction::Count, global = true)]
  pub verbose: u8,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Convert an image (PNG, JPEG, ...) into a raw RGB565 stream
  Encode(EncodeArgs),
  /// Convert a raw RGB565 stream into an image
  Decode(DecodeArgs),
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
  /// Source image, any format the `image` crate can read
  pub input: PathBuf,
  /// Destination for the raw RGB565 stream
  pub output: PathBuf,
  #[command(flatten)]
  pub dimensions: Dimensions,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
  /// Source raw RGB565 stream
  pub input: PathBuf,
  /// Destination image, the format is inferred from the file extension
  pub output: PathBuf,
  #[command(flatten)]
  pub dimensions: Dimensions,
}

/// Image dimensions. Raw streams don't store these, so they must match on
/// both sides of a conversion.
#[derive(Debug, Args)]
pub struct Dimensions {
  /// Image width in pixels
  #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = value_parser!(u32).range(1..))]
  pub width: u32,
  /// Image height in pixels
  #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = value_parser!(u32).range(1..))]
  pub height: u32,
}

impl Dimensions {
  pub fn to_meta(&self) -> Result<ImageMeta, rgb565::Error> {
    ImageMeta::new(self.width, self.height)
  }
}
