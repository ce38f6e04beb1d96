//! Scalar functions over serialized ranges.
//!
//! These are the bodies the host binds to `int4range(...)`, `numrange(...)`,
//! the text casts, `range_overlaps`, `range_contains` and the accessors. Each
//! call decodes its inputs afresh and writes any range result into a
//! caller-owned buffer.
//!
//! ```
//! use bytes::BytesMut;
//! use pgrange::functions;
//!
//! let mut a = BytesMut::new();
//! let mut b = BytesMut::new();
//! functions::construct(2020, 2023, &mut a);
//! functions::construct(2022, 2025, &mut b);
//! assert!(functions::overlaps::<i32>(&a, &b).unwrap());
//! ```

use crate::codec;
use crate::error::RangeResult;
use crate::text;
use crate::types::{Range, RangeElement};
use bytes::BytesMut;

/// `int4range(lower, upper)`: bounds default to `[)`.
pub fn construct<T: RangeElement>(lower: T, upper: T, out: &mut BytesMut) {
    codec::serialize(&Range::new(lower, upper), out);
}

/// `int4range(lower, upper, bounds)`: an empty token means `[)`.
pub fn construct_with_notation<T: RangeElement>(
    lower: T,
    upper: T,
    notation: &str,
    out: &mut BytesMut,
) -> RangeResult<()> {
    codec::serialize(&Range::with_notation(lower, upper, notation)?, out);
    Ok(())
}

/// `int4range(lower, upper, lower_inc, upper_inc)`
pub fn construct_with_flags<T: RangeElement>(
    lower: T,
    upper: T,
    lower_inc: bool,
    upper_inc: bool,
    out: &mut BytesMut,
) {
    codec::serialize(&Range::with_bounds(lower, upper, lower_inc, upper_inc), out);
}

/// `int4range(literal)`
pub fn construct_from_literal<T: RangeElement>(literal: &str, out: &mut BytesMut) -> RangeResult<()> {
    from_text::<T>(literal, out)
}

/// Cast range → text.
pub fn to_text<T: RangeElement>(raw: &[u8]) -> RangeResult<String> {
    Ok(text::format(&codec::deserialize::<T>(raw)?))
}

/// Cast text → range.
pub fn from_text<T: RangeElement>(literal: &str, out: &mut BytesMut) -> RangeResult<()> {
    codec::serialize(&text::parse::<T>(literal)?, out);
    Ok(())
}

/// `range_overlaps(a, b)`
pub fn overlaps<T: RangeElement>(a: &[u8], b: &[u8]) -> RangeResult<bool> {
    let a = codec::deserialize::<T>(a)?;
    let b = codec::deserialize::<T>(b)?;
    Ok(a.overlaps(&b))
}

/// `range_contains(range, value)`
pub fn contains<T: RangeElement>(raw: &[u8], value: T) -> RangeResult<bool> {
    Ok(codec::deserialize::<T>(raw)?.contains(value))
}

/// `value <@ range`
pub fn contained_by<T: RangeElement>(value: T, raw: &[u8]) -> RangeResult<bool> {
    contains(raw, value)
}

/// `lower(range)`
pub fn lower<T: RangeElement>(raw: &[u8]) -> RangeResult<T> {
    Ok(codec::deserialize::<T>(raw)?.lower())
}

/// `upper(range)`
pub fn upper<T: RangeElement>(raw: &[u8]) -> RangeResult<T> {
    Ok(codec::deserialize::<T>(raw)?.upper())
}

/// `lower_inc(range)`
pub fn lower_inc<T: RangeElement>(raw: &[u8]) -> RangeResult<bool> {
    Ok(codec::deserialize::<T>(raw)?.lower_inc())
}

/// `upper_inc(range)`
pub fn upper_inc<T: RangeElement>(raw: &[u8]) -> RangeResult<bool> {
    Ok(codec::deserialize::<T>(raw)?.upper_inc())
}

/// `isempty(range)`
pub fn is_empty<T: RangeElement>(raw: &[u8]) -> RangeResult<bool> {
    Ok(codec::deserialize::<T>(raw)?.is_empty())
}
