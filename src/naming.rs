//! Output file names derived from the input name.

use crate::stereo::StereoMode;

/// Number of trailing characters dropped from an input name (".mpo").
pub const EXTENSION_LEN: usize = 4;

/// Drops the last four characters of `input` and appends `suffix`.
///
/// The extension is not parsed: `photo.jpeg` becomes `photo._left.jpg`.
pub fn derive_output_name(input: &str, suffix: &str) -> String {
    let keep = input.chars().count().saturating_sub(EXTENSION_LEN);
    let mut name: String = input.chars().take(keep).collect();
    name.push_str(suffix);
    name
}

pub fn left_name(input: &str) -> String {
    derive_output_name(input, "_left.jpg")
}

pub fn right_name(input: &str) -> String {
    derive_output_name(input, "_right.jpg")
}

pub fn stereo_name(input: &str, mode: StereoMode) -> String {
    derive_output_name(input, &format!("_{mode}.jpg"))
}
