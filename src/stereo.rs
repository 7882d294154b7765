//! Side-by-side stereo composition.

use std::fmt;
use std::str::FromStr;

use image::{imageops, DynamicImage, RgbImage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StereoMode {
    /// Left image on the left, for diverged viewing.
    Parallel,
    /// Images swapped, for cross-eyed viewing.
    CrossEye,
}

impl StereoMode {
    pub const VARIANTS: [&'static str; 2] = ["parallel", "crosseye"];

    pub fn as_str(self) -> &'static str {
        match self {
            StereoMode::Parallel => "parallel",
            StereoMode::CrossEye => "crosseye",
        }
    }
}

impl fmt::Display for StereoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StereoMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parallel" => Ok(StereoMode::Parallel),
            "crosseye" => Ok(StereoMode::CrossEye),
            other => Err(format!(
                "invalid stereo type '{other}' (expected 'parallel' or 'crosseye')"
            )),
        }
    }
}

/// Lays `left` and `right` out on one RGB canvas.
///
/// The canvas is `2 * right.width` by `right.height`. Neither image is
/// scaled: a left image of a different size is pasted as-is and clipped to
/// the canvas.
pub fn compose(left: &DynamicImage, right: &DynamicImage, mode: StereoMode) -> RgbImage {
    let offset = right.width();
    let mut canvas = RgbImage::new(2 * right.width(), right.height());

    let left = left.to_rgb8();
    let right = right.to_rgb8();
    let (first, second) = match mode {
        StereoMode::Parallel => (&left, &right),
        StereoMode::CrossEye => (&right, &left),
    };

    imageops::replace(&mut canvas, first, 0, 0);
    imageops::replace(&mut canvas, second, i64::from(offset), 0);
    canvas
}
