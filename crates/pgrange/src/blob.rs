//! Tagged range payloads.
//!
//! The host stores ranges as opaque byte blobs aliased to a logical type name.
//! [`RangeBlob`] pairs the bytes with that tag so callers can route a value to
//! the matching `Range<T>` without inspecting the payload.

use crate::codec;
use crate::error::{RangeError, RangeResult};
use crate::text::{self, FormatOptions};
use crate::types::{Range, RangeElement, RangeType};
use bytes::Bytes;

/// A serialized range plus its logical type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeBlob {
    range_type: RangeType,
    bytes: Bytes,
}

impl RangeBlob {
    /// Wrap raw bytes produced elsewhere. The payload is not validated here.
    pub fn new(range_type: RangeType, bytes: impl Into<Bytes>) -> Self {
        Self {
            range_type,
            bytes: bytes.into(),
        }
    }

    /// Serialize `range` and tag it with its type.
    pub fn encode<T: RangeElement>(range: &Range<T>) -> Self {
        Self::new(T::RANGE_TYPE, codec::to_bytes(range))
    }

    /// Parse a literal as `range_type` and serialize it.
    pub fn parse(range_type: RangeType, literal: &str) -> RangeResult<Self> {
        match range_type {
            RangeType::Int4Range => Ok(Self::encode(&text::parse::<i32>(literal)?)),
            RangeType::NumRange => Ok(Self::encode(&text::parse::<f64>(literal)?)),
        }
    }

    /// The logical type tag.
    pub fn range_type(&self) -> RangeType {
        self.range_type
    }

    /// The raw payload.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Consume the blob, returning the payload.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    /// Decode as `Range<T>`, checking the tag first.
    pub fn decode<T: RangeElement>(&self) -> RangeResult<Range<T>> {
        if self.range_type != T::RANGE_TYPE {
            return Err(RangeError::TypeMismatch {
                expected: T::RANGE_TYPE.name(),
                actual: self.range_type.name(),
            });
        }
        codec::deserialize(&self.bytes)
    }

    /// Render the literal form using the tag to pick the bound type.
    pub fn to_text(&self) -> RangeResult<String> {
        self.to_text_with(&FormatOptions::default())
    }

    /// [`to_text`](Self::to_text) with explicit formatting options.
    pub fn to_text_with(&self, opts: &FormatOptions) -> RangeResult<String> {
        match self.range_type {
            RangeType::Int4Range => Ok(self.decode::<i32>()?.to_text_with(opts)),
            RangeType::NumRange => Ok(self.decode::<f64>()?.to_text_with(opts)),
        }
    }
}

impl AsRef<[u8]> for RangeBlob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
