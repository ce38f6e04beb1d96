//! Bound scalar types.
//!
//! [`RangeElement`] is everything a range needs from its bound type: ordering,
//! a fixed-width little-endian layout and literal parsing/formatting. The
//! predicate engine, codec and parser are written once against this trait.

use bytes::{Buf, BufMut, BytesMut};
use std::fmt;

/// Logical type tag of a serialized range, as registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    /// `INT4RANGE`: bounds are 32-bit signed integers.
    Int4Range,
    /// `NUMRANGE`: bounds are IEEE-754 doubles.
    NumRange,
}

impl RangeType {
    /// Type name the host registers the blob alias under.
    pub fn name(self) -> &'static str {
        match self {
            RangeType::Int4Range => "INT4RANGE",
            RangeType::NumRange => "NUMRANGE",
        }
    }

    /// Host name of the bound scalar type.
    pub fn scalar_name(self) -> &'static str {
        match self {
            RangeType::Int4Range => "INTEGER",
            RangeType::NumRange => "DOUBLE",
        }
    }

    /// Width in bytes of one serialized value.
    pub fn encoded_len(self) -> usize {
        match self {
            RangeType::Int4Range => crate::codec::encoded_len::<i32>(),
            RangeType::NumRange => crate::codec::encoded_len::<f64>(),
        }
    }

    /// Look up a range type by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("int4range") {
            Some(RangeType::Int4Range)
        } else if name.eq_ignore_ascii_case("numrange") {
            Some(RangeType::NumRange)
        } else {
            None
        }
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar usable as a range bound.
pub trait RangeElement: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// Serialized width of one bound.
    const WIDTH: usize;
    /// Logical range type built over this scalar.
    const RANGE_TYPE: RangeType;
    /// Lower bound of the canonical empty range.
    const EMPTY_LOWER: Self;
    /// Upper bound of the canonical empty range.
    const EMPTY_UPPER: Self;

    /// Append the raw little-endian bytes.
    fn put_le(self, out: &mut BytesMut);

    /// Read the raw little-endian bytes. `raw` holds at least `WIDTH` bytes.
    fn get_le(raw: &mut &[u8]) -> Self;

    /// Parse a literal, returning `None` when the text is not a valid value.
    fn parse_literal(s: &str) -> Option<Self>;

    /// Write the literal form. `precision` only applies to fractional types.
    fn write_literal(self, out: &mut dyn fmt::Write, precision: usize) -> fmt::Result;
}

impl RangeElement for i32 {
    const WIDTH: usize = 4;
    const RANGE_TYPE: RangeType = RangeType::Int4Range;
    const EMPTY_LOWER: Self = 1;
    const EMPTY_UPPER: Self = 0;

    fn put_le(self, out: &mut BytesMut) {
        out.put_i32_le(self);
    }

    fn get_le(raw: &mut &[u8]) -> Self {
        raw.get_i32_le()
    }

    fn parse_literal(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    fn write_literal(self, out: &mut dyn fmt::Write, _precision: usize) -> fmt::Result {
        write!(out, "{}", self)
    }
}

impl RangeElement for f64 {
    const WIDTH: usize = 8;
    const RANGE_TYPE: RangeType = RangeType::NumRange;
    const EMPTY_LOWER: Self = 1.0;
    const EMPTY_UPPER: Self = 0.0;

    fn put_le(self, out: &mut BytesMut) {
        out.put_f64_le(self);
    }

    fn get_le(raw: &mut &[u8]) -> Self {
        raw.get_f64_le()
    }

    fn parse_literal(s: &str) -> Option<Self> {
        // Accepts `NaN` so every formatted value parses back.
        s.parse().ok()
    }

    fn write_literal(self, out: &mut dyn fmt::Write, precision: usize) -> fmt::Result {
        write!(out, "{:.*}", precision, self)
    }
}
