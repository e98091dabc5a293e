//! PNG structural verification.
//!
//! Checks that a file is a well-formed PNG container: signature, header,
//! chunk structure, checksums, and a complete IDAT stream through IEND.
//! Decoded pixel data is discarded; this is a verify pass, not a decode.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

/// Failure to structurally verify a PNG file.
///
/// Callers collapse every variant into a single pass/fail outcome; the
/// source is kept only so a reason can be displayed.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode PNG: {0}")]
    Decode(#[from] png::DecodingError),
}

/// Structurally verifies the PNG file at `path`.
///
/// Parses the signature and header, then walks every remaining chunk to
/// IEND, validating CRCs and inflating the image data stream without
/// retaining the output. Truncation, bad checksums, malformed chunks, and
/// plain I/O errors all surface as [`VerifyError`].
pub fn verify_png(path: &Path) -> Result<(), VerifyError> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info()?;
    reader.finish()?;
    Ok(())
}
