//! Generic object/JSON conversion helpers and the [`Rect`] value object.
//!
//! [`encode`] serializes any `Serialize` value to compact JSON text;
//! [`decode`] parses JSON text back into a typed value. The target type is
//! what attaches behavior to the decoded data, so no separate descriptor
//! argument is needed. Field presence and types are checked by serde during
//! deserialization.

#![forbid(unsafe_code)]

mod rect;

pub use rect::Rect;

use core::error::Error;
use core::fmt::{self, Display, Formatter};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors from JSON conversion.
#[derive(Debug)]
pub enum CodecError {
    /// The value could not be represented as JSON.
    Encode(serde_json::Error),
    /// The text was not valid JSON for the requested type.
    Decode(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(source) => write!(formatter, "JSON encode failed: {source}"),
            Self::Decode(source) => write!(formatter, "JSON decode failed: {source}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(source) | Self::Decode(source) => Some(source),
        }
    }
}

/// Serialize `value` to compact JSON text.
///
/// # Errors
/// Returns [`CodecError::Encode`] when the value cannot be represented as
/// JSON (for example, a map with non-string keys).
pub fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(|source| {
        log::debug!("JSON encode failed: {source}");
        CodecError::Encode(source)
    })
}

/// Parse JSON `text` into a `T`.
///
/// # Errors
/// Returns [`CodecError::Decode`] when the text is not valid JSON or does
/// not match the shape of `T`.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    serde_json::from_str(text).map_err(|source| {
        log::debug!("JSON decode failed: {source}");
        CodecError::Decode(source)
    })
}
