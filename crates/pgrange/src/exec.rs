//! Batch execution with null propagation.
//!
//! The host hands over columns of values where `None` marks a null row. These
//! helpers apply a scalar function row by row and emit `None` for any row
//! with a null argument, without calling the function for that row.
//!
//! ```
//! use bytes::Bytes;
//! use pgrange::{codec, exec, Int4Range};
//!
//! let ranges = vec![Some(codec::to_bytes(&Int4Range::new(1, 10))), None];
//! let values = vec![Some(5), Some(5)];
//! let out = exec::try_binary(&ranges, &values, |r: &Bytes, v: &i32| {
//!     pgrange::functions::contains(r, *v)
//! })
//! .unwrap();
//! assert_eq!(out, vec![Some(true), None]);
//! ```

use crate::error::{RangeError, RangeResult};

fn check_len(expected: usize, actual: usize) -> RangeResult<()> {
    if expected != actual {
        return Err(RangeError::BatchLength { expected, actual });
    }
    Ok(())
}

fn trace_batch(kind: &'static str, rows: usize, nulls: usize) {
    tracing::trace!(target: "pgrange.exec", kind, rows, nulls, "batch executed");
}

fn count_nulls<R>(out: &[Option<R>]) -> usize {
    out.iter().filter(|v| v.is_none()).count()
}

/// Apply `f` to every non-null row.
pub fn unary<A, R>(input: &[Option<A>], mut f: impl FnMut(&A) -> R) -> Vec<Option<R>> {
    let out: Vec<Option<R>> = input.iter().map(|a| a.as_ref().map(&mut f)).collect();
    trace_batch("unary", out.len(), count_nulls(&out));
    out
}

/// Fallible [`unary`]: the first error aborts the batch.
pub fn try_unary<A, R>(
    input: &[Option<A>],
    mut f: impl FnMut(&A) -> RangeResult<R>,
) -> RangeResult<Vec<Option<R>>> {
    let out = input
        .iter()
        .map(|a| a.as_ref().map(&mut f).transpose())
        .collect::<RangeResult<Vec<_>>>()?;
    trace_batch("unary", out.len(), count_nulls(&out));
    Ok(out)
}

/// Apply `f` to every row where both arguments are non-null.
pub fn binary<A, B, R>(
    a: &[Option<A>],
    b: &[Option<B>],
    mut f: impl FnMut(&A, &B) -> R,
) -> RangeResult<Vec<Option<R>>> {
    try_binary(a, b, |x, y| Ok(f(x, y)))
}

/// Fallible [`binary`]: the first error aborts the batch.
pub fn try_binary<A, B, R>(
    a: &[Option<A>],
    b: &[Option<B>],
    mut f: impl FnMut(&A, &B) -> RangeResult<R>,
) -> RangeResult<Vec<Option<R>>> {
    check_len(a.len(), b.len())?;
    let out = a
        .iter()
        .zip(b)
        .map(|row| match row {
            (Some(x), Some(y)) => f(x, y).map(Some),
            _ => Ok(None),
        })
        .collect::<RangeResult<Vec<_>>>()?;
    trace_batch("binary", out.len(), count_nulls(&out));
    Ok(out)
}

/// Apply `f` to every row where all three arguments are non-null.
pub fn ternary<A, B, C, R>(
    a: &[Option<A>],
    b: &[Option<B>],
    c: &[Option<C>],
    mut f: impl FnMut(&A, &B, &C) -> R,
) -> RangeResult<Vec<Option<R>>> {
    try_ternary(a, b, c, |x, y, z| Ok(f(x, y, z)))
}

/// Fallible [`ternary`]: the first error aborts the batch.
pub fn try_ternary<A, B, C, R>(
    a: &[Option<A>],
    b: &[Option<B>],
    c: &[Option<C>],
    mut f: impl FnMut(&A, &B, &C) -> RangeResult<R>,
) -> RangeResult<Vec<Option<R>>> {
    check_len(a.len(), b.len())?;
    check_len(a.len(), c.len())?;
    let out = a
        .iter()
        .zip(b)
        .zip(c)
        .map(|row| match row {
            ((Some(x), Some(y)), Some(z)) => f(x, y, z).map(Some),
            _ => Ok(None),
        })
        .collect::<RangeResult<Vec<_>>>()?;
    trace_batch("ternary", out.len(), count_nulls(&out));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::functions;
    use crate::types::Int4Range;
    use bytes::{Bytes, BytesMut};

    fn blob(r: Int4Range) -> Option<Bytes> {
        Some(codec::to_bytes(&r))
    }

    #[test]
    fn nulls_short_circuit() {
        let input = vec![Some(1), None, Some(3)];
        let mut calls = 0;
        let out = unary(&input, |v| {
            calls += 1;
            v * 2
        });
        assert_eq!(out, vec![Some(2), None, Some(6)]);
        assert_eq!(calls, 2);
    }

    #[test]
    fn null_row_skips_decoding() {
        let input = vec![blob(Int4Range::new(1, 3)), None];
        let mut decoded = 0;
        let out = try_unary(&input, |r| {
            decoded += 1;
            functions::is_empty::<i32>(r)
        })
        .unwrap();
        assert_eq!(out, vec![Some(false), None]);
        assert_eq!(decoded, 1);
    }

    #[test]
    fn first_error_aborts() {
        let input = vec![Some(Bytes::from_static(&[1, 2, 3])), blob(Int4Range::new(1, 3))];
        let err = try_unary(&input, |r| functions::lower::<i32>(r)).unwrap_err();
        assert!(err.is_malformed_encoding());
    }

    #[test]
    fn binary_overlaps() {
        let a = vec![blob(Int4Range::new(2020, 2023)), blob(Int4Range::new(2024, 2027)), None];
        let b = vec![blob(Int4Range::new(2022, 2025)), blob(Int4Range::new(2020, 2023)), blob(Int4Range::empty())];
        let out = try_binary(&a, &b, |x, y| functions::overlaps::<i32>(x, y)).unwrap();
        assert_eq!(out, vec![Some(true), Some(false), None]);
    }

    #[test]
    fn binary_length_mismatch() {
        let a = vec![Some(1)];
        let b: Vec<Option<i32>> = vec![];
        assert_eq!(
            binary(&a, &b, |x, y| x + y).unwrap_err(),
            RangeError::BatchLength {
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn ternary_constructor() {
        let lower = vec![Some(1), Some(5), None, Some(1)];
        let upper = vec![Some(5), Some(5), Some(9), Some(2)];
        let bounds = vec![Some("[]"), Some("()"), Some("[)"), None];
        let out = try_ternary(&lower, &upper, &bounds, |l, u, n| {
            let mut buf = BytesMut::new();
            functions::construct_with_notation(*l, *u, n, &mut buf)?;
            functions::to_text::<i32>(&buf)
        })
        .unwrap();
        assert_eq!(
            out,
            vec![Some("[1,5]".to_string()), Some("empty".to_string()), None, None]
        );

        let bad = vec![Some("<>")];
        let err = try_ternary(&[Some(1)], &[Some(2)], &bad, |l, u, n| {
            let mut buf = BytesMut::new();
            functions::construct_with_notation(*l, *u, n, &mut buf)
        })
        .unwrap_err();
        assert!(err.is_invalid_bounds_notation());
    }

    #[test]
    fn ternary_plain() {
        let out = ternary(&[Some(1_i32)], &[Some(2)], &[Some(3)], |a, b, c| a + b + c).unwrap();
        assert_eq!(out, vec![Some(6)]);
        assert!(ternary(&[Some(1)], &[Some(2)], &[], |a: &i32, b: &i32, c: &i32| a + b + c).is_err());
    }
}
