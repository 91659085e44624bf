//! `rgb565` converts images to and from raw RGB565 little-endian streams.
//!
//! ```sh
//! rgb565 encode photo.jpg photo.rgb565 --width 160 --height 120
//! rgb565 decode photo.rgb565 preview.png --width 160 --height 120
//! ```
//!
//! Raw streams don't record their dimensions, so decoding needs the same
//! `--width` and `--height` the stream was encoded with.

mod args;
mod convert;
mod error;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, LevelFilter};

use args::{Cli, Command};
use error::Error;

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logger(cli.verbose);

  match run(cli.command) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("error: {}", e);
      ExitCode::FAILURE
    }
  }
}

fn run(command: Command) -> Result<(), Error> {
  debug!("running {:?}", command);

  match command {
    Command::Encode(args) => {
      let meta = args.dimensions.to_meta()?;
      convert::encode_file(&args.input, &args.output, &meta)?;

      println!(
        "Wrote {} ({}x{} rgb565)",
        args.output.display(),
        meta.width,
        meta.height
      );
    }
    Command::Decode(args) => {
      let meta = args.dimensions.to_meta()?;
      convert::decode_file(&args.input, &args.output, &meta)?;

      println!("Wrote {} ({}x{})", args.output.display(), meta.width, meta.height);
    }
  }

  Ok(())
}

// Maps the `-v` count to a level filter. `RUST_LOG`, when set, takes
// precedence.
fn init_logger(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  env_logger::Builder::new()
    .filter_level(level)
    .parse_default_env()
    .init();
}
