//! Program source loading.
//!
//! Reads accumulator assembly from disk so it can be handed to
//! `CpuEngine::load_program`. Parsing happens in the engine; this module only
//! deals with the filesystem.

use std::fs;
use std::path::Path;

use crate::common::LoadError;

/// Reads a program source file into a string.
///
/// # Arguments
///
/// * `path` - Path to the source file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read or is not UTF-8.
pub fn load_source(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}
