//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`Physical`] backend that implements the [`crate::file::Backend`]
//! trait for accessing files from disk using memory-mapped I/O. The file handle is released as
//! soon as the mapping exists, and the mapping itself is released when the backend is dropped,
//! so no handle outlives a single parse call.
//!
//! # Examples
//!
//! ```rust,no_run
//! use slnscope::file::{Backend, Physical};
//!
//! let physical = Physical::new("MyProject/MyProject.csproj")?;
//! println!("Project file size: {} bytes", physical.len());
//! # Ok::<(), slnscope::Error>(())
//! ```

use super::Backend;
use crate::{
    Error::{Error, FileError},
    Result,
};

use memmap2::Mmap;
use std::{fs, path::Path};

/// A file backend that uses memory-mapped I/O to access files on disk.
///
/// Zero-length files are not mapped; they yield an empty backend so that the parsers can report
/// the empty input themselves.
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data, `None` for zero-length files
    data: Option<Mmap>,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Arguments
    /// * `path` - Path to the file on disk. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => return Err(FileError(error)),
        };

        Self::from_std_file(&file)
    }

    /// Creates a new physical file backend from an opened [`std::fs::File`].
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file metadata cannot be read or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn from_std_file(file: &fs::File) -> Result<Physical> {
        if file.metadata()?.len() == 0 {
            return Ok(Physical { data: None });
        }

        let mmap = match unsafe { Mmap::map(file) } {
            Ok(mmap) => mmap,
            Err(error) => return Err(Error(error.to_string())),
        };

        Ok(Physical { data: Some(mmap) })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        match &self.data {
            Some(mmap) => mmap.as_ref(),
            None => &[],
        }
    }

    fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |mmap| mmap.len())
    }
}
