use std::fs;
use std::path::Path;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use tempfile::tempdir;

fn rgb565() -> Command {
  Command::cargo_bin("rgb565").expect("Failed to find rgb565 binary")
}

fn write_png(path: &Path, image: &RgbImage) {
  image.save(path).expect("Failed to write fixture image");
}

#[test]
fn test_encoding_png_at_exact_size() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("in.png");
  let output = dir.path().join("out.rgb565");

  let mut image = RgbImage::new(2, 1);
  image.put_pixel(0, 0, Rgb([255, 0, 0]));
  image.put_pixel(1, 0, Rgb([255, 255, 255]));
  write_png(&input, &image);

  rgb565()
    .arg("encode")
    .arg(&input)
    .arg(&output)
    .args(["--width", "2", "--height", "1"])
    .assert()
    .success()
    .stdout(predicate::str::contains("out.rgb565 (2x1 rgb565)"));

  assert_eq!(fs::read(&output).expect("Failed to read output"), vec![0x00, 0xf8, 0xff, 0xff]);
}

#[test]
fn test_encoding_resizes_to_default_dimensions() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("in.png");
  let output = dir.path().join("out.rgb565");

  write_png(&input, &RgbImage::from_pixel(16, 12, Rgb([0, 0, 0])));

  rgb565()
    .arg("encode")
    .arg(&input)
    .arg(&output)
    .assert()
    .success()
    .stdout(predicate::str::contains("(160x120 rgb565)"));

  let raw = fs::read(&output).expect("Failed to read output");
  assert_eq!(raw.len(), 2 * 160 * 120);
  assert!(raw.iter().all(|&byte| byte == 0));
}

#[test]
fn test_decoding_to_png() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("in.rgb565");
  let output = dir.path().join("out.png");

  fs::write(&input, [0x00u8, 0xf8, 0xff, 0xff]).expect("Failed to write fixture stream");

  rgb565()
    .arg("decode")
    .arg(&input)
    .arg(&output)
    .args(["--width", "1", "--height", "2"])
    .assert()
    .success()
    .stdout(predicate::str::contains("out.png (1x2)"));

  let decoded = image::open(&output).expect("Failed to open output").to_rgb8();
  assert_eq!(decoded.dimensions(), (1, 2));
  assert_eq!(decoded.get_pixel(0, 0), &Rgb([248, 0, 0]));
  assert_eq!(decoded.get_pixel(0, 1), &Rgb([248, 252, 248]));
}

#[test]
fn test_round_trip_through_files() {
  let dir = tempdir().expect("Failed to create temp dir");
  let source = dir.path().join("source.png");
  let raw = dir.path().join("image.rgb565");
  let restored = dir.path().join("restored.png");

  let image = RgbImage::from_fn(8, 4, |x, y| Rgb([(x * 31) as u8, (y * 63) as u8, 0x7f]));
  write_png(&source, &image);

  rgb565()
    .args(["encode", "--width", "8", "--height", "4"])
    .arg(&source)
    .arg(&raw)
    .assert()
    .success();

  rgb565()
    .args(["decode", "--width", "8", "--height", "4"])
    .arg(&raw)
    .arg(&restored)
    .assert()
    .success();

  let restored = image::open(&restored).expect("Failed to open output").to_rgb8();
  for (x, y, pixel) in image.enumerate_pixels() {
    let Rgb([r, g, b]) = *pixel;
    assert_eq!(restored.get_pixel(x, y), &Rgb([r & 0xf8, g & 0xfc, b & 0xf8]));
  }
}

#[test]
fn test_decoding_with_wrong_dimensions_fails() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("in.rgb565");
  let output = dir.path().join("out.png");

  fs::write(&input, [0x00u8, 0x00, 0x00]).expect("Failed to write fixture stream");

  rgb565()
    .arg("decode")
    .arg(&input)
    .arg(&output)
    .args(["--width", "2", "--height", "1"])
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("expected 4 bytes but found 3"));

  assert!(!output.exists());
}

#[test]
fn test_encoding_missing_input_fails() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("missing.png");
  let output = dir.path().join("out.rgb565");

  rgb565()
    .arg("encode")
    .arg(&input)
    .arg(&output)
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("missing.png"));

  assert!(!output.exists());
}

#[test]
fn test_encoding_corrupt_input_fails() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("corrupt.png");
  let output = dir.path().join("out.rgb565");

  fs::write(&input, b"definitely not a png").expect("Failed to write fixture");

  rgb565()
    .arg("encode")
    .arg(&input)
    .arg(&output)
    .assert()
    .failure()
    .stderr(predicate::str::starts_with("error: "));

  assert!(!output.exists());
}

#[test]
fn test_encoding_oversized_dimensions_fails_cleanly() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("in.png");
  let output = dir.path().join("out.rgb565");

  write_png(&input, &RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])));

  rgb565()
    .arg("encode")
    .arg(&input)
    .arg(&output)
    .args(["--width", "300000", "--height", "300000"])
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("error: invalid image dimensions 300000x300000"));

  assert!(!output.exists());
}

#[test]
fn test_decoding_oversized_dimensions_fails_cleanly() {
  let dir = tempdir().expect("Failed to create temp dir");
  let input = dir.path().join("in.rgb565");
  let output = dir.path().join("out.png");

  fs::write(&input, [0x00u8, 0x00]).expect("Failed to write fixture stream");

  rgb565()
    .arg("decode")
    .arg(&input)
    .arg(&output)
    .args(["--width", "300000", "--height", "300000"])
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("invalid image dimensions"));

  assert!(!output.exists());
}

#[test]
fn test_zero_width_is_rejected() {
  rgb565()
    .args(["encode", "in.png", "out.rgb565", "--width", "0"])
    .assert()
    .failure()
    .code(2);
}
