//! Pluggable value codec for persisted cells.
//!
//! # Responsibility
//! - Translate typed values to and from the substrate's text representation.
//! - Keep the interchange format swappable for tests and future schemas.
//!
//! # Invariants
//! - Decoding trusts the stored shape; there is no schema validation beyond
//!   what deserialization itself enforces.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Codec-level failure: stored text that does not decode, or a value that
/// cannot be encoded.
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Typed text codec injected into `PersistedCell`.
pub trait Codec<T> {
    fn encode(&self, value: &T) -> CodecResult<String>;
    fn decode(&self, raw: &str) -> CodecResult<T>;
}

/// Default codec: the standard structured text interchange format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> CodecResult<String> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode(&self, raw: &str) -> CodecResult<T> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{Codec, JsonCodec};

    #[test]
    fn json_codec_round_trips_values() {
        let codec = JsonCodec;
        let raw = codec.encode(&vec![1_u32, 2, 3]).unwrap();
        let decoded: Vec<u32> = codec.decode(&raw).unwrap();
        assert_eq!(decoded, vec![1, 2, 3]);
    }

    #[test]
    fn json_codec_rejects_malformed_text() {
        let codec = JsonCodec;
        let result: super::CodecResult<Vec<u32>> = codec.decode("not-json{");
        assert!(result.is_err());
    }
}
