//! Memory-based backend for in-memory input.
//!
//! [`Memory`] wraps an owned byte buffer. It is used when a caller hands project or solution
//! content over directly (a byte slice, or everything read from a stream) instead of a path.

use super::Backend;

/// A backend over an owned in-memory buffer.
///
/// # Examples
///
/// ```rust
/// use slnscope::file::{Backend, Memory};
///
/// let memory = Memory::new(b"<Project />".to_vec());
/// assert_eq!(memory.len(), 11);
/// ```
#[derive(Debug)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Creates a new memory backend that takes ownership of `data`.
    #[must_use]
    pub fn new(data: Vec<u8>) -> Memory {
        Memory { data }
    }
}

impl Backend for Memory {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory() {
        let mut data = vec![0x20_u8; 1048];
        data[10] = b'<';
        data[11] = b'/';
        data[12] = b'>';

        let memory = Memory::new(data);

        assert_eq!(memory.len(), 1048);
        assert!(!memory.is_empty());
        assert_eq!(memory.data()[0], 0x20);
        assert_eq!(&memory.data()[10..13], b"</>");
    }

    #[test]
    fn memory_empty() {
        let memory = Memory::new(Vec::new());
        assert!(memory.is_empty());
        assert_eq!(memory.data(), b"");
    }
}
