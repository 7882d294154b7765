//! JPEG marker codes and raw marker-sequence scanning.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JpegMarker {
    StartOfImage = 0xD8,               // SOI
    ApplicationData1 = 0xE1,           // APP1: Application data 1: used for Exif and MP headers.
}

impl JpegMarker {
    /// The two bytes this marker occupies in a stream (0xFF prefix + code).
    pub const fn bytes(self) -> [u8; 2] {
        [0xFF, self as u8]
    }
}

/// SOI immediately followed by APP1: the signature of an embedded image following the first one.
pub const SECOND_IMAGE_SIGNATURE: [u8; 4] = {
    let soi = JpegMarker::StartOfImage.bytes();
    let app1 = JpegMarker::ApplicationData1.bytes();
    [soi[0], soi[1], app1[0], app1[1]]
};

/// Returns the offset of the first occurrence of `needle` at or after `start`.
pub fn find_marker_sequence(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    if needle.is_empty() || start >= haystack.len() {
        return None;
    }

    haystack[start..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| position + start)
}
