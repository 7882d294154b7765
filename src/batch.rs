//! Processing a list of MPO files one after another.
//!
//! Each file is read, split, decoded and saved before the next one is
//! touched. A failing file is reported and skipped; it never stops the run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::error::MpoError;
use crate::mpo;
use crate::naming;
use crate::stereo::{self, StereoMode};

/// Quality used when none is given; matches the usual JPEG encoder default.
pub const DEFAULT_QUALITY: u8 = 75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Composite output mode; `None` writes separate left/right files.
    pub stereo: Option<StereoMode>,
    pub quality: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            stereo: None,
            quality: DEFAULT_QUALITY,
        }
    }
}

#[derive(Debug)]
pub struct FileOutcome {
    pub input: String,
    pub result: Result<Vec<PathBuf>, MpoError>,
}

/// Per-file results of one run, in input order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .flatten()
    }

    pub fn failures(&self) -> impl Iterator<Item = &MpoError> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err())
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }
}

/// Expands a lone argument containing `*` as a glob; anything else is used verbatim.
pub fn expand_inputs(args: &[String]) -> Vec<String> {
    match args {
        [pattern] if pattern.contains('*') => expand_glob(pattern),
        _ => args.to_vec(),
    }
}

fn expand_glob(pattern: &str) -> Vec<String> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let paths = match glob::glob_with(pattern, options) {
        Ok(paths) => paths,
        Err(e) => {
            log::warn!("invalid pattern {pattern:?}: {e}");
            return Vec::new();
        }
    };

    let files: Vec<String> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path.to_string_lossy().into_owned()),
            Err(e) => {
                log::warn!("skipping unreadable match: {e}");
                None
            }
        })
        .collect();
    log::debug!("{pattern:?} matched {} file(s): {files:?}", files.len());
    files
}

/// Splits one file and writes its outputs, announcing each write on `out`.
///
/// `index` is 1-based. Returns the paths written.
pub fn process_file<W: Write>(
    input: &str,
    index: usize,
    total: usize,
    options: &Options,
    out: &mut W,
) -> Result<Vec<PathBuf>, MpoError> {
    let pair = mpo::read_mpo(Path::new(input))?;

    let mut written = Vec::new();
    match options.stereo {
        Some(mode) => {
            let canvas = stereo::compose(&pair.left, &pair.right, mode);
            let path = PathBuf::from(naming::stereo_name(input, mode));
            announce(out, &path, index, total)?;
            save_jpeg(&DynamicImage::ImageRgb8(canvas), &path, options.quality)?;
            written.push(path);
        }
        None => {
            let outputs = [
                (&pair.left, naming::left_name(input)),
                (&pair.right, naming::right_name(input)),
            ];
            for (image, name) in outputs {
                let path = PathBuf::from(name);
                announce(out, &path, index, total)?;
                save_jpeg(image, &path, options.quality)?;
                written.push(path);
            }
        }
    }

    Ok(written)
}

/// Processes every input in order, reporting failures on `out` and carrying on.
///
/// Only a failure to write to `out` itself ends the run early.
pub fn run<W: Write>(inputs: &[String], options: &Options, out: &mut W) -> io::Result<RunReport> {
    let total = inputs.len();
    let mut report = RunReport::default();

    for (i, input) in inputs.iter().enumerate() {
        let result = match process_file(input, i + 1, total, options, out) {
            Err(MpoError::Output(e)) => return Err(e),
            result => result,
        };
        if let Err(e) = &result {
            log::debug!("{input}: {e:?}");
            for line in e.report_lines() {
                writeln!(out, "{line}")?;
            }
        }
        report.outcomes.push(FileOutcome {
            input: input.clone(),
            result,
        });
    }

    out.flush()?;
    Ok(report)
}

fn announce<W: Write>(out: &mut W, path: &Path, index: usize, total: usize) -> Result<(), MpoError> {
    writeln!(out, "Writing {} ({}/{})", path.display(), index, total).map_err(MpoError::Output)
}

fn save_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<(), MpoError> {
    let file = File::create(path).map_err(|e| MpoError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| MpoError::image(path, e))?;
    writer.flush().map_err(|e| MpoError::io(path, e))
}
