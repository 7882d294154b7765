use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

pub const RED: Rgb<u8> = Rgb([220, 30, 30]);
pub const BLUE: Rgb<u8> = Rgb([30, 30, 220]);

/// Encodes a solid-color RGB image as a baseline JPEG (SOI followed by APP0).
pub fn solid_jpeg(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .expect("encode jpeg");
    bytes
}

/// Inserts a small APP1 segment right after SOI so the stream starts with FF D8 FF E1.
pub fn with_app1(jpeg: &[u8]) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x06, b'M', b'P', b'F', 0x00];
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Two solid JPEGs spliced the way a stereo camera writes them.
pub fn mpo_bytes(left: (u32, u32, Rgb<u8>), right: (u32, u32, Rgb<u8>)) -> Vec<u8> {
    let mut data = solid_jpeg(left.0, left.1, left.2);
    data.extend(with_app1(&solid_jpeg(right.0, right.1, right.2)));
    data
}

pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> String {
    let path: PathBuf = dir.join(name);
    fs::write(&path, data).expect("write fixture");
    path.to_string_lossy().into_owned()
}

/// Compares colors with room for JPEG quantization error.
pub fn close_to(actual: Rgb<u8>, expected: Rgb<u8>) -> bool {
    actual
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, e)| (i16::from(*a) - i16::from(*e)).abs() <= 16)
}
