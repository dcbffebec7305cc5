use engrave::{
  png::{
    is_png_header_correct, png_encode_rgba8, png_get_header, PngChunkTy, PngColorType,
    PngRawChunkIter, PNG_SIGNATURE,
  },
  RGBA8,
};
use walkdir::WalkDir;

/// A pixel function with some variety in every channel.
fn gradient(x: u32, y: u32) -> RGBA8 {
  RGBA8 { r: (x * 40) as u8, g: (y * 50) as u8, b: (x + y) as u8, a: 255 - (x * y) as u8 }
}

/// Inflates the IDAT payload back into the filtered scanline buffer.
fn raw_scanlines(png: &[u8]) -> Vec<u8> {
  let idat: Vec<u8> = PngRawChunkIter::new(png)
    .filter(|c| c.ty() == PngChunkTy::IDAT)
    .flat_map(|c| c.data().iter().copied())
    .collect();
  miniz_oxide::inflate::decompress_to_vec_zlib(&idat).unwrap()
}

#[test]
fn test_RawPngChunkIter_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in PngRawChunkIter::new(&v) {
      //
    }
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in PngRawChunkIter::new(&v) {
      //
    }
  }
  // truncating valid output anywhere shouldn't panic it either.
  let png = png_encode_rgba8(4, 4, gradient).unwrap();
  for keep in 0..png.len() {
    for _ in PngRawChunkIter::new(&png[..keep]) {
      //
    }
  }
}

#[test]
fn test_encode_output_starts_with_the_signature() {
  let png = png_encode_rgba8(1, 1, gradient).unwrap();
  assert_eq!(&png[..8], &PNG_SIGNATURE);
  assert!(is_png_header_correct(&png));
}

#[test]
fn test_encode_header_parses_back() {
  let png = png_encode_rgba8(5, 3, gradient).unwrap();
  let ihdr = png_get_header(&png).unwrap();
  assert_eq!(ihdr.width, 5);
  assert_eq!(ihdr.height, 3);
  assert_eq!(ihdr.bit_depth, 8);
  assert_eq!(ihdr.color_type, PngColorType::RGBA);
  assert!(!ihdr.is_interlaced);
}

#[test]
fn test_encode_emits_exactly_ihdr_idat_iend() {
  let png = png_encode_rgba8(4, 2, gradient).unwrap();
  let chunks: Vec<_> = PngRawChunkIter::new(&png).collect();
  assert_eq!(chunks.len(), 3);
  assert_eq!(chunks[0].ty(), PngChunkTy::IHDR);
  assert_eq!(chunks[0].data().len(), 13);
  assert_eq!(chunks[1].ty(), PngChunkTy::IDAT);
  assert_eq!(chunks[2].ty(), PngChunkTy::IEND);
  assert!(chunks[2].data().is_empty());
}

#[test]
fn test_every_chunk_crc_matches() {
  let png = png_encode_rgba8(6, 6, gradient).unwrap();
  for chunk in PngRawChunkIter::new(&png) {
    assert_eq!(chunk.declared_crc(), chunk.compute_actual_crc(), "bad crc in {chunk:?}");
  }
}

#[test]
fn test_corrupting_a_payload_byte_breaks_the_crc() {
  let mut png = png_encode_rgba8(6, 6, gradient).unwrap();
  // first byte of the IHDR payload: signature (8) + length (4) + type (4).
  png[16] ^= 0xFF;
  let ihdr_chunk = PngRawChunkIter::new(&png).next().unwrap();
  assert_eq!(ihdr_chunk.ty(), PngChunkTy::IHDR);
  assert_ne!(ihdr_chunk.declared_crc(), ihdr_chunk.compute_actual_crc());
}

#[test]
fn test_encode_is_deterministic() {
  let a = png_encode_rgba8(9, 7, gradient).unwrap();
  let b = png_encode_rgba8(9, 7, gradient).unwrap();
  assert_eq!(a, b);
}

#[test]
fn test_two_pixel_image_round_trips() {
  let red = RGBA8 { r: 255, g: 0, b: 0, a: 255 };
  let half_green = RGBA8 { r: 0, g: 255, b: 0, a: 128 };
  let png = png_encode_rgba8(2, 1, |x, _y| if x == 0 { red } else { half_green }).unwrap();
  // one scanline: filter byte 0, opaque red, then green at alpha 128.
  assert_eq!(raw_scanlines(&png), vec![0, 255, 0, 0, 255, 0, 255, 0, 128]);
}

#[test]
fn test_round_trip_fidelity() {
  const W: u32 = 7;
  const H: u32 = 5;
  let png = png_encode_rgba8(W, H, gradient).unwrap();
  let raw = raw_scanlines(&png);
  assert_eq!(raw.len(), (H as usize) * (1 + 4 * W as usize));
  let mut lines = raw.chunks_exact(1 + 4 * W as usize);
  for y in 0..H {
    let line = lines.next().unwrap();
    assert_eq!(line[0], 0, "row {y} has a non-None filter byte");
    for x in 0..W {
      let i = 1 + 4 * x as usize;
      let RGBA8 { r, g, b, a } = gradient(x, y);
      assert_eq!(&line[i..i + 4], &[r, g, b, a], "pixel mismatch at ({x}, {y})");
    }
  }
}
