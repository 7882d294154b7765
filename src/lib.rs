//! Split MPO stereo photos into their two JPEG images, or lay the pair out
//! side by side as a parallel or cross-eye stereo JPEG.

pub mod batch;
pub mod error;
pub mod marker;
pub mod mpo;
pub mod naming;
pub mod stereo;

pub use crate::batch::{expand_inputs, process_file, run, Options, RunReport};
pub use crate::error::MpoError;
pub use crate::mpo::{read_mpo, split, MpoPair};
pub use crate::stereo::{compose, StereoMode};
