//! Per-file error type and the report printed when a file fails.
//!
//! A file either is not an MPO at all (`Format`) or fails somewhere in the
//! read / decode / encode / write chain. Those variants carry the path the
//! failure is about so the batch loop can print it and move on. `Output` is
//! the exception: the progress stream itself broke and the run stops.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum MpoError {
    /// No second SOI + APP1 sequence after the first byte.
    #[error("{} is not a valid MPO file", .path.display())]
    Format { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Decoding one of the embedded JPEGs or encoding an output failed.
    #[error("{}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Writing progress output failed; this ends the whole run.
    #[error("cannot write progress output: {0}")]
    Output(#[source] io::Error),
}

impl MpoError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        MpoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Image errors that merely wrap an OS error are reported as I/O errors.
    pub fn image(path: &Path, source: image::ImageError) -> Self {
        match source {
            image::ImageError::IoError(source) => MpoError::io(path, source),
            source => MpoError::Image {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub fn is_format_error(&self) -> bool {
        matches!(self, MpoError::Format { .. })
    }

    /// Lines printed to stdout for this failure.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            MpoError::Format { .. } | MpoError::Output(_) => vec![self.to_string()],
            MpoError::Io { path, source } => {
                let errno = match source.raw_os_error() {
                    Some(code) => code.to_string(),
                    None => "None".to_string(),
                };
                vec![
                    format!("{}:", path.display()),
                    format!("errno: {errno}"),
                    format!("err code: {}", error_code_name(source)),
                    format!("err message: {}", error_message(source)),
                ]
            }
            MpoError::Image { path, source } => vec![
                format!("{}:", path.display()),
                "errno: None".to_string(),
                format!("err code: {}", image_error_code_name(source)),
                format!("err message: {source}"),
            ],
        }
    }
}

/// Symbolic errno name (`ENOENT`, `EPERM` ...) for an I/O error.
///
/// Errors without an OS code, or with one the platform table does not know,
/// fall back to the `ErrorKind` name.
pub fn error_code_name(error: &io::Error) -> String {
    match error.raw_os_error().and_then(os_error) {
        Some((name, _)) => name,
        None => format!("{:?}", error.kind()),
    }
}

/// The OS description of an I/O error, without the `(os error N)` suffix.
pub fn error_message(error: &io::Error) -> String {
    match error.raw_os_error().and_then(os_error) {
        Some((_, description)) => description.to_string(),
        None => error.to_string(),
    }
}

#[cfg(unix)]
fn os_error(code: i32) -> Option<(String, &'static str)> {
    use nix::errno::Errno;

    match Errno::from_raw(code) {
        Errno::UnknownErrno => None,
        errno => Some((format!("{errno:?}"), errno.desc())),
    }
}

#[cfg(not(unix))]
fn os_error(_code: i32) -> Option<(String, &'static str)> {
    None
}

fn image_error_code_name(error: &image::ImageError) -> &'static str {
    match error {
        image::ImageError::Decoding(_) => "Decoding",
        image::ImageError::Encoding(_) => "Encoding",
        image::ImageError::Parameter(_) => "Parameter",
        image::ImageError::Limits(_) => "Limits",
        image::ImageError::Unsupported(_) => "Unsupported",
        image::ImageError::IoError(_) => "Io",
    }
}
