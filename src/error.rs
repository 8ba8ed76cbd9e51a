//! Error types for the tinyrc4 library.

use std::fmt;

/// Errors produced by the tinyrc4 library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rc4Error {
    /// Key is empty. The key schedule reads key bytes cyclically and
    /// requires at least one byte.
    InvalidKey,
    /// Transform input length does not match the held keystream length.
    KeystreamLengthMismatch {
        /// Length of the currently held keystream.
        expected: usize,
        /// Byte length of the transform input.
        actual: usize,
    },
    /// A character cannot be represented as a single byte (code point
    /// above U+00FF).
    EncodingError {
        /// The offending character.
        character: char,
    },
}

impl fmt::Display for Rc4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rc4Error::InvalidKey => {
                write!(f, "Key must be at least 1 byte long")
            }
            Rc4Error::KeystreamLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Input length {} does not match keystream length {}",
                    actual, expected
                )
            }
            Rc4Error::EncodingError { character } => {
                write!(
                    f,
                    "Character '{}' (U+{:04X}) cannot be encoded as a single byte",
                    character, *character as u32
                )
            }
        }
    }
}

impl std::error::Error for Rc4Error {}
