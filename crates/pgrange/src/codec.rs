//! Fixed-width binary encoding of range values.
//!
//! Layout, little-endian with no padding:
//!
//! | offset | size  | field            |
//! |--------|-------|------------------|
//! | 0      | W     | lower bound      |
//! | W      | W     | upper bound      |
//! | 2W     | 1     | bounds flag byte |
//!
//! where `W` is [`RangeElement::WIDTH`]. This gives 9 bytes for `int4range`
//! and 17 bytes for `numrange`.

use crate::error::{RangeError, RangeResult};
use crate::types::{Range, RangeElement};
use bytes::{Buf, BufMut, Bytes, BytesMut};

const LOWER_INCLUSIVE: u8 = 0b10;
const UPPER_INCLUSIVE: u8 = 0b01;

/// Number of bytes one serialized `Range<T>` occupies.
pub const fn encoded_len<T: RangeElement>() -> usize {
    T::WIDTH * 2 + 1
}

/// Append the encoding of `range` to `out`.
pub fn serialize<T: RangeElement>(range: &Range<T>, out: &mut BytesMut) {
    out.reserve(encoded_len::<T>());
    range.lower.put_le(out);
    range.upper.put_le(out);

    let mut flags = 0u8;
    if range.lower_inc {
        flags |= LOWER_INCLUSIVE;
    }
    if range.upper_inc {
        flags |= UPPER_INCLUSIVE;
    }
    out.put_u8(flags);
}

/// Encode `range` into a fresh buffer.
pub fn to_bytes<T: RangeElement>(range: &Range<T>) -> Bytes {
    let mut out = BytesMut::with_capacity(encoded_len::<T>());
    serialize(range, &mut out);
    out.freeze()
}

/// Decode a range from `raw`.
///
/// Bytes past the fixed width are ignored. Bound order is not checked: an
/// inverted range decodes as-is and reports itself through `is_empty()`.
pub fn deserialize<T: RangeElement>(raw: &[u8]) -> RangeResult<Range<T>> {
    let expected = encoded_len::<T>();
    if raw.len() < expected {
        tracing::debug!(
            target: "pgrange.codec",
            range_type = T::RANGE_TYPE.name(),
            expected,
            actual = raw.len(),
            "range blob too short"
        );
        return Err(RangeError::MalformedEncoding {
            type_name: T::RANGE_TYPE.name(),
            expected,
            actual: raw.len(),
        });
    }

    let mut buf = &raw[..expected];
    let lower = T::get_le(&mut buf);
    let upper = T::get_le(&mut buf);
    let flags = buf.get_u8();

    Ok(Range {
        lower,
        upper,
        lower_inc: flags & LOWER_INCLUSIVE != 0,
        upper_inc: flags & UPPER_INCLUSIVE != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Int4Range, NumRange};

    #[test]
    fn widths() {
        assert_eq!(encoded_len::<i32>(), 9);
        assert_eq!(encoded_len::<f64>(), 17);
    }

    #[test]
    fn int_layout() {
        let bytes = to_bytes(&Int4Range::new(1, 10));
        assert_eq!(&bytes[..], &[1, 0, 0, 0, 10, 0, 0, 0, 0b10]);

        let bytes = to_bytes(&Int4Range::with_bounds(-1, 256, false, true));
        assert_eq!(&bytes[..], &[0xff, 0xff, 0xff, 0xff, 0, 1, 0, 0, 0b01]);
    }

    #[test]
    fn canonical_empty_layout() {
        let bytes = to_bytes(&Int4Range::empty());
        assert_eq!(&bytes[..], &[1, 0, 0, 0, 0, 0, 0, 0, 0]);

        let bytes = to_bytes(&NumRange::empty());
        let mut expected = Vec::new();
        expected.extend_from_slice(&1.0_f64.to_le_bytes());
        expected.extend_from_slice(&0.0_f64.to_le_bytes());
        expected.push(0);
        assert_eq!(&bytes[..], &expected[..]);
    }

    #[test]
    fn binary_roundtrip_is_exact() {
        let ranges = [
            Int4Range::inclusive(i32::MIN, i32::MAX),
            Int4Range::new(9, 3),
            Int4Range::exclusive(5, 5),
            Int4Range::empty(),
        ];
        for r in ranges {
            assert_eq!(deserialize::<i32>(&to_bytes(&r)).unwrap(), r);
        }

        let r = NumRange::upper_inclusive(-0.25, 1e300);
        assert_eq!(deserialize::<f64>(&to_bytes(&r)).unwrap(), r);
    }

    #[test]
    fn serialize_appends() {
        let mut out = BytesMut::new();
        serialize(&Int4Range::new(1, 2), &mut out);
        serialize(&Int4Range::new(3, 4), &mut out);
        assert_eq!(out.len(), 18);
        assert_eq!(deserialize::<i32>(&out[9..]).unwrap(), Int4Range::new(3, 4));
    }

    #[test]
    fn short_input_is_rejected() {
        let err = deserialize::<i32>(&[0, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            RangeError::MalformedEncoding {
                type_name: "INT4RANGE",
                expected: 9,
                actual: 3
            }
        );

        let int_bytes = to_bytes(&Int4Range::new(1, 2));
        let err = deserialize::<f64>(&int_bytes).unwrap_err();
        assert!(err.is_malformed_encoding());
        assert!(deserialize::<i32>(&[]).is_err());
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut raw = to_bytes(&Int4Range::inclusive(4, 8)).to_vec();
        raw.extend_from_slice(&[0xaa, 0xbb]);
        assert_eq!(deserialize::<i32>(&raw).unwrap(), Int4Range::inclusive(4, 8));
    }

    #[test]
    fn unknown_flag_bits_are_ignored() {
        let mut raw = to_bytes(&Int4Range::new(1, 2)).to_vec();
        raw[8] = 0b1111_1101;
        let r = deserialize::<i32>(&raw).unwrap();
        assert!(!r.lower_inc);
        assert!(r.upper_inc);
    }
}
