//! Zen Identifiers (ZIDs).
//!
//! A ZID is a fixed-length identifier whose every bit comes from the operating system's
//! cryptographically secure random number generator. There is no timestamp, no counter, no node
//! identifier and no reserved version/variant bits.
//!
//! ## Canonical form
//! - Length: `bits / 4` characters (two per byte)
//! - Characters: `0-9` and `a-f` only
//! - No prefix, no separators
//! - Example (128-bit): `90f44e35a062479289ff75ab2abc0ed3`
//!
//! Bit lengths are always a positive multiple of 8.
//!
//! ## Validation and parsing
//! [`is_valid`] and [`parse`] accept canonical text only. Callers reading from case-insensitive
//! sources can opt into [`CaseMode::Relaxed`] through [`is_valid_with`] and [`parse_with`], which
//! additionally accept `A-F`. Output is always lowercase regardless of how the input was cased.
//!
//! ## UUID-style text
//! A 128-bit ZID can be shown in a dashed 8-4-4-16 layout with [`to_uuid_style`] and read back
//! with [`from_uuid_style`]. These are text transforms only: the result looks like a UUID but makes
//! no claim about UUID version/variant bits, and UUID text converted the other way does not gain
//! ZID's generation guarantees.
//!
//! ## Thread safety
//! Every function here is free of shared state. Generation reads from [`rand::rngs::OsRng`], which
//! is safe to use from any number of threads concurrently.

mod generator;
mod uuid_style;
mod validation;

pub use generator::{check_bit_length, create, create_with, to_hex, Zid, DEFAULT_BITS};
pub use uuid_style::{from_uuid_style, to_uuid_style, UUID_BITS};
pub use validation::{is_valid, is_valid_with, parse, parse_with, validate, CaseMode};

use std::fmt;

/// Error type for ZID operations.
#[derive(Debug, thiserror::Error)]
pub enum ZidError {
    /// Requested bit length is not a positive multiple of 8, or does not match what the operation
    /// requires.
    #[error("invalid bit length {bits}: {reason}")]
    InvalidLength { bits: usize, reason: &'static str },

    /// The secure random source could not supply the requested bytes.
    #[error("secure entropy source unavailable: {0}")]
    EntropyUnavailable(#[source] rand::Error),

    /// Text failed validation.
    #[error("malformed identifier '{text}': {violation}")]
    MalformedIdentifier { text: String, violation: Violation },

    /// UUID-style conversion input is not exactly 32 characters once normalised.
    #[error("expected 32 hex characters for UUID-style conversion, got {actual}")]
    WrongLength { actual: usize },
}

impl ZidError {
    /// Returns the violated rule if this is a [`ZidError::MalformedIdentifier`].
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ZidError::MalformedIdentifier { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

/// Result type for ZID operations.
pub type ZidResult<T> = Result<T, ZidError>;

/// The rule a piece of text broke during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    Empty,
    OddLength { len: usize },
    LengthMismatch { expected: usize, actual: usize },
    InvalidCharacter { character: char, index: usize },
    /// `A-F` seen in strict mode.
    UppercaseCharacter { character: char, index: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "text is empty"),
            Violation::OddLength { len } => {
                write!(f, "length {len} is odd, expected two characters per byte")
            }
            Violation::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} characters, got {actual}")
            }
            Violation::InvalidCharacter { character, index } => {
                write!(f, "invalid character {character:?} at index {index}")
            }
            Violation::UppercaseCharacter { character, index } => write!(
                f,
                "uppercase character {character:?} at index {index} (canonical form is lowercase)"
            ),
        }
    }
}
