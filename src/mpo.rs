//! Splitting an MPO file into its two embedded JPEG images.
//!
//! An MPO is treated as two JPEG streams laid back to back. The boundary is
//! the first SOI + APP1 sequence found after the very first byte of the file.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::MpoError;
use crate::marker::{find_marker_sequence, SECOND_IMAGE_SIGNATURE};

/// The two decoded halves of one MPO file.
#[derive(Clone, Debug)]
pub struct MpoPair {
    pub left: DynamicImage,
    pub right: DynamicImage,
}

/// Splits `buffer` at the start of the second embedded JPEG.
///
/// The scan starts at offset 1 so the leading SOI of the first image can
/// never match. Returns `None` when no boundary is found.
pub fn split(buffer: &[u8]) -> Option<(&[u8], &[u8])> {
    match find_marker_sequence(buffer, &SECOND_IMAGE_SIGNATURE, 1) {
        Some(index) if index > 0 => Some(buffer.split_at(index)),
        _ => None,
    }
}

/// Reads the whole file into memory. The handle is closed before returning.
pub fn read_file(path: &Path) -> Result<Vec<u8>, MpoError> {
    let file = File::open(path).map_err(|e| MpoError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| MpoError::io(path, e))?;
    Ok(data)
}

/// Splits the in-memory contents of `path` and decodes both halves.
pub fn decode_mpo(path: &Path, data: &[u8]) -> Result<MpoPair, MpoError> {
    let (left_bytes, right_bytes) = split(data).ok_or_else(|| MpoError::Format {
        path: path.to_path_buf(),
    })?;
    log::debug!(
        "{}: second image starts at offset {} ({} + {} bytes)",
        path.display(),
        left_bytes.len(),
        left_bytes.len(),
        right_bytes.len()
    );

    let left = decode_jpeg(path, left_bytes)?;
    let right = decode_jpeg(path, right_bytes)?;
    log::debug!(
        "{}: left {}x{}, right {}x{}",
        path.display(),
        left.width(),
        left.height(),
        right.width(),
        right.height()
    );

    Ok(MpoPair { left, right })
}

/// Reads and splits one MPO file.
pub fn read_mpo(path: &Path) -> Result<MpoPair, MpoError> {
    let data = read_file(path)?;
    decode_mpo(path, &data)
}

fn decode_jpeg(path: &Path, bytes: &[u8]) -> Result<DynamicImage, MpoError> {
    image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)
        .map_err(|e| MpoError::image(path, e))
}
