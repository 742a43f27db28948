//! File-based SWC persistence.
//!
//! Thin wrappers around the in-memory codec: [`load`] memory-maps a file and hands
//! its content to [`crate::format::parse_swc`]; [`save`] serializes a morphology
//! with [`crate::format::write_swc`] and writes it out. Both wrap any underlying
//! failure - I/O, encoding, or parse - into [`crate::Error::InvalidFile`] so the
//! caller always learns which path was involved.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use morphoscope::format;
//!
//! let morphology = format::load("reconstruction.swc")?;
//! let simplified = morphology.smoothed();
//! format::save("skeleton.swc", &simplified)?;
//! # Ok::<(), morphoscope::Error>(())
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use memmap2::Mmap;

use crate::{
    format::{parse_swc, write_swc},
    morphology::NeuronMorphology,
    Error, Result,
};

/// Wraps a failure into [`Error::InvalidFile`] naming `path`.
fn invalid_file(path: &Path, source: Error) -> Error {
    Error::InvalidFile {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// Loads a morphology from an SWC file on disk.
///
/// The file is memory-mapped rather than read into an intermediate buffer, then
/// validated as UTF-8 and parsed with the same strict rules as
/// [`crate::format::parse_swc`].
///
/// # Errors
/// Returns [`Error::InvalidFile`] naming `path`, with the underlying I/O,
/// encoding, or parse failure as its source.
pub fn load(path: impl AsRef<Path>) -> Result<NeuronMorphology> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|error| invalid_file(path, error.into()))?;

    // Safety: the mapping is read-only and dropped before this function returns;
    // concurrent truncation of the underlying file is outside our control, as
    // with any memory-mapped input.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|error| invalid_file(path, error.into()))?;

    let text = std::str::from_utf8(&mmap).map_err(|error| {
        invalid_file(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, error).into(),
        )
    })?;

    parse_swc(text).map_err(|error| invalid_file(path, error))
}

/// Saves a morphology to disk as SWC text, returning the path written.
///
/// # Errors
/// Returns [`Error::InvalidFile`] naming `path` if the file cannot be written.
pub fn save(path: impl AsRef<Path>, morphology: &NeuronMorphology) -> Result<PathBuf> {
    let path = path.as_ref();
    fs::write(path, write_swc(morphology)).map_err(|error| invalid_file(path, error.into()))?;
    Ok(path.to_path_buf())
}
