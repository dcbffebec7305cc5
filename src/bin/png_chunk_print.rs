//! Prints the chunk framing of each PNG file given on the command line.
//!
//! Handy for eyeballing encoder output: every chunk is listed with its
//! declared CRC and the CRC computed from the bytes actually present.

use engrave::png::{is_png_header_correct, PngRawChunkIter};

fn main() {
  let args: Vec<String> = std::env::args().collect();
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    if !is_png_header_correct(&bytes) {
      println!("  (signature is wrong, this is probably not a PNG)");
    }
    for (n, raw_chunk) in PngRawChunkIter::new(&bytes).enumerate() {
      let declared = raw_chunk.declared_crc();
      let actual = raw_chunk.compute_actual_crc();
      let verdict = if declared == actual { "ok" } else { "MISMATCH" };
      println!(
        "{n}: {:?} len={} crc={declared:08X}/{actual:08X} {verdict}",
        raw_chunk.ty(),
        raw_chunk.data().len(),
      );
    }
  }
}
