//! Generates the recorder's three tray icon PNGs.
//!
//! Run with no arguments. Writes `idle.png`, `recording.png`, and
//! `paused.png` (48x48 RGBA) into the directory containing the executable,
//! overwriting whatever was already there, and prints one line per file.

use std::path::PathBuf;

use engrave::{png::png_encode_rgba8, RGBA8};

const ICON_SIZE: u32 = 48;

const IDLE_GRAY: RGBA8 = RGBA8 { r: 130, g: 130, b: 140, a: 255 };
const RECORDING_RED: RGBA8 = RGBA8 { r: 220, g: 50, b: 50, a: 255 };
const PAUSED_YELLOW: RGBA8 = RGBA8 { r: 230, g: 190, b: 40, a: 255 };

fn main() {
  let out_dir: PathBuf = match std::env::current_exe() {
    Ok(exe) => match exe.parent() {
      Some(dir) => dir.to_owned(),
      None => PathBuf::from("."),
    },
    Err(_) => PathBuf::from("."),
  };

  let icons: [(&str, Vec<u8>); 3] = [
    ("idle.png", make_idle()),
    ("recording.png", make_recording()),
    ("paused.png", make_paused()),
  ];

  for (name, data) in icons.iter() {
    std::fs::write(out_dir.join(name), data).unwrap();
    println!("Created {name} ({} bytes)", data.len());
  }
  println!("Done.");
}

/// Gray microphone silhouette icon.
fn make_idle() -> Vec<u8> {
  png_encode_rgba8(ICON_SIZE, ICON_SIZE, microphone(ICON_SIZE, IDLE_GRAY)).unwrap()
}

/// Bright red filled circle.
fn make_recording() -> Vec<u8> {
  let c = ICON_SIZE as f32 / 2.0;
  let radius = c - 4.0;
  png_encode_rgba8(ICON_SIZE, ICON_SIZE, circle(c, c, radius, RECORDING_RED)).unwrap()
}

/// Two vertical yellow bars on a transparent background.
fn make_paused() -> Vec<u8> {
  png_encode_rgba8(ICON_SIZE, ICON_SIZE, bars(ICON_SIZE, PAUSED_YELLOW)).unwrap()
}

/// Samples a filled circle with a 1 pixel anti-aliased rim.
///
/// Fully opaque inside `radius - 0.5`, with alpha ramping linearly down to 0
/// across the `radius +/- 0.5` band.
fn circle(cx: f32, cy: f32, radius: f32, color: RGBA8) -> impl Fn(u32, u32) -> RGBA8 {
  move |x, y| {
    let d = dist(x as f32, y as f32, cx, cy);
    if d <= radius - 0.5 {
      color
    } else if d <= radius + 0.5 {
      RGBA8 { a: ((radius + 0.5 - d) * 255.0) as u8, ..color }
    } else {
      RGBA8::default()
    }
  }
}

/// Samples a microphone silhouette: pill body, arc arm, post, and base bar.
fn microphone(size: u32, color: RGBA8) -> impl Fn(u32, u32) -> RGBA8 {
  let cx = size as f32 / 2.0;
  let cy = size as f32 / 2.0;

  // mic body: corner radius = half the width, so it's a pill shape
  let body_w = 14.0;
  let body_h = 18.0;
  let body_x0 = cx - body_w / 2.0;
  let body_y0 = cy - body_h / 2.0 - 4.0;
  let body_r = body_w / 2.0;

  // stand post, with the base bar under it
  let post_w = 3.0;
  let post_h = 8.0;
  let post_x0 = cx - post_w / 2.0;
  let post_y0 = cy + body_h / 2.0 - 4.0;

  let base_w = 16.0;
  let base_h = 3.0;
  let base_x0 = cx - base_w / 2.0;
  let base_y0 = post_y0 + post_h - 1.0;

  // upward arc connecting the body bottom to the post
  let arm_r = 11.0;
  let (arm_cx, arm_cy) = (cx, post_y0);

  move |x, y| {
    let xf = x as f32;
    let yf = y as f32;

    let in_body_core = (body_x0 + body_r..=body_x0 + body_w - body_r).contains(&xf)
      && (body_y0..=body_y0 + body_h).contains(&yf);
    let in_body_mid = (body_x0..=body_x0 + body_w).contains(&xf)
      && (body_y0 + body_r..=body_y0 + body_h - body_r).contains(&yf);
    let in_top_cap = dist(xf, yf, cx, body_y0 + body_r) <= body_r;
    let in_bot_cap = dist(xf, yf, cx, body_y0 + body_h - body_r) <= body_r;
    let in_body = in_body_core || in_body_mid || in_top_cap || in_bot_cap;

    let in_post =
      (post_x0..=post_x0 + post_w).contains(&xf) && (post_y0..=post_y0 + post_h).contains(&yf);

    let in_base =
      (base_x0..=base_x0 + base_w).contains(&xf) && (base_y0..=base_y0 + base_h).contains(&yf);

    let in_arm = (dist(xf, yf, arm_cx, arm_cy) - arm_r).abs() <= 1.5
      && yf <= arm_cy
      && (arm_cx - arm_r - 1.0..=arm_cx + arm_r + 1.0).contains(&xf);

    if in_body || in_post || in_base || in_arm {
      color
    } else {
      RGBA8::default()
    }
  }
}

/// Samples two vertical bars with rounded corners, centered in the icon.
fn bars(size: u32, color: RGBA8) -> impl Fn(u32, u32) -> RGBA8 {
  let bar_w = 9;
  let bar_h = 24;
  let gap = 8;
  let top = (size - bar_h) / 2;
  let total_w = bar_w * 2 + gap;
  let left1 = (size - total_w) / 2;
  let left2 = left1 + bar_w + gap;
  let bar_r = 3.0;

  move |x, y| {
    let in_bar1 = rounded_rect(x, y, left1 as f32, top as f32, bar_w as f32, bar_h as f32, bar_r);
    let in_bar2 = rounded_rect(x, y, left2 as f32, top as f32, bar_w as f32, bar_h as f32, bar_r);
    if in_bar1 || in_bar2 {
      color
    } else {
      RGBA8::default()
    }
  }
}

/// Whether `(x, y)` is within `r` of the `rw` by `rh` rectangle at `(rx, ry)`.
fn rounded_rect(x: u32, y: u32, rx: f32, ry: f32, rw: f32, rh: f32, r: f32) -> bool {
  let dx = (rx - x as f32).max(0.0).max(x as f32 - (rx + rw));
  let dy = (ry - y as f32).max(0.0).max(y as f32 - (ry + rh));
  (dx * dx + dy * dy).sqrt() <= r
}

fn dist(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
  let dx = x - cx;
  let dy = y - cy;
  (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
  use super::*;
  use engrave::png::{png_get_header, PngChunkTy, PngRawChunkIter};

  /// Inflates the IDAT payload back into the filtered scanline buffer.
  fn raw_scanlines(png: &[u8]) -> Vec<u8> {
    let idat: Vec<u8> = PngRawChunkIter::new(png)
      .filter(|c| c.ty() == PngChunkTy::IDAT)
      .flat_map(|c| c.data().iter().copied())
      .collect();
    miniz_oxide::inflate::decompress_to_vec_zlib(&idat).unwrap()
  }

  fn pixel_at(raw: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
    let line = 1 + 4 * size as usize;
    let i = (y as usize * line) + 1 + (4 * x as usize);
    raw[i..i + 4].try_into().unwrap()
  }

  #[test]
  fn test_recording_icon_pixels() {
    let png = make_recording();
    let ihdr = png_get_header(&png).unwrap();
    assert_eq!((ihdr.width, ihdr.height), (ICON_SIZE, ICON_SIZE));
    let raw = raw_scanlines(&png);
    // the corner is outside the circle's radius, the center is solid red.
    assert_eq!(pixel_at(&raw, ICON_SIZE, 0, 0), [0, 0, 0, 0]);
    assert_eq!(pixel_at(&raw, ICON_SIZE, 24, 24), [220, 50, 50, 255]);
  }

  #[test]
  fn test_idle_icon_pixels() {
    let raw = raw_scanlines(&make_idle());
    assert_eq!(pixel_at(&raw, ICON_SIZE, 0, 0), [0, 0, 0, 0]);
    // the middle of the mic body
    assert_eq!(pixel_at(&raw, ICON_SIZE, 24, 19), [130, 130, 140, 255]);
  }

  #[test]
  fn test_paused_icon_pixels() {
    let raw = raw_scanlines(&make_paused());
    assert_eq!(pixel_at(&raw, ICON_SIZE, 0, 0), [0, 0, 0, 0]);
    // the middle of the left bar, and the gap between the bars
    assert_eq!(pixel_at(&raw, ICON_SIZE, 15, 24), [230, 190, 40, 255]);
    assert_eq!(pixel_at(&raw, ICON_SIZE, 24, 24), [0, 0, 0, 0]);
  }
}
