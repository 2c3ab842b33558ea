//! Input backends and text decoding for solution and project files.
//!
//! Solution and project files are small text documents, but they reach the parsers through
//! several routes: a path on disk, a byte buffer handed over by a caller, or an arbitrary
//! reader. This module abstracts over those data sources with the [`Backend`] trait and turns
//! the raw bytes into text with [`decode_text`].
//!
//! # Key Components
//!
//! - [`Backend`] - Common access to the bytes of an input
//! - [`Memory`] - Backend over an owned byte buffer
//! - [`Physical`] - Backend over a memory-mapped file on disk
//! - [`decode_text`] - Byte-order-mark aware conversion to UTF-8 text
//!
//! # Encodings
//!
//! Visual Studio writes solution files as UTF-8 with a byte order mark, and older tooling
//! writes project files as UTF-16. The decoder recognises:
//!
//! - UTF-8 with or without BOM (`EF BB BF`)
//! - UTF-16 little endian with BOM (`FF FE`)
//! - UTF-16 big endian with BOM (`FE FF`)
//!
//! Anything that is not valid in the detected encoding is reported as
//! [`crate::Error::Malformed`].
//!
//! # Examples
//!
//! ```rust
//! use slnscope::file::{decode_text, Backend, Memory};
//!
//! let memory = Memory::new(b"\xEF\xBB\xBF<Project />".to_vec());
//! let text = decode_text(memory.data())?;
//! assert_eq!(text, "<Project />");
//! # Ok::<(), slnscope::Error>(())
//! ```

mod memory;
mod physical;

use std::{borrow::Cow, io::Read};

use widestring::U16Str;

use crate::Result;

pub use memory::Memory;
pub use physical::Physical;

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// Backend trait for input data sources.
///
/// This trait abstracts over the source of file data, allowing for both in-memory and on-disk
/// representations. All implementations must be thread-safe.
pub trait Backend: Send + Sync {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the backend holds no data.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads a complete stream into a [`Memory`] backend.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if reading from the stream fails.
pub fn read_to_memory<R: Read + ?Sized>(reader: &mut R) -> Result<Memory> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    Ok(Memory::new(data))
}

/// Decodes raw file bytes into text, honouring a leading byte order mark.
///
/// Input without a byte order mark is treated as UTF-8. The returned text never contains the
/// byte order mark itself.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if the bytes are not valid in the detected encoding.
pub fn decode_text(data: &[u8]) -> Result<Cow<'_, str>> {
    if let Some(rest) = data.strip_prefix(BOM_UTF8) {
        return utf8(rest);
    }

    if let Some(rest) = data.strip_prefix(BOM_UTF16_LE) {
        return utf16(rest, u16::from_le_bytes).map(Cow::Owned);
    }

    if let Some(rest) = data.strip_prefix(BOM_UTF16_BE) {
        return utf16(rest, u16::from_be_bytes).map(Cow::Owned);
    }

    utf8(data)
}

fn utf8(data: &[u8]) -> Result<Cow<'_, str>> {
    match std::str::from_utf8(data) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(error) => Err(malformed_error!("Invalid UTF-8 text - {}", error)),
    }
}

fn utf16(data: &[u8], convert: fn([u8; 2]) -> u16) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(malformed_error!(
            "Invalid UTF-16 text length - {}",
            data.len()
        ));
    }

    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| convert([pair[0], pair[1]]))
        .collect();

    U16Str::from_slice(&units)
        .to_string()
        .map_err(|error| malformed_error!("Invalid UTF-16 text - {}", error))
}
