//! Relational predicates over range values.
//!
//! All predicates are total: an empty (or inverted) range never overlaps
//! anything and contains nothing.

use crate::types::{Range, RangeElement};

/// Whether `r` contains no values.
pub fn is_empty<T: RangeElement>(r: &Range<T>) -> bool {
    r.is_empty()
}

/// `a` ends before `b` begins, with no shared point.
fn left_of<T: RangeElement>(a: &Range<T>, b: &Range<T>) -> bool {
    a.upper < b.lower || (a.upper == b.lower && (!a.upper_inc || !b.lower_inc))
}

/// Whether the two ranges share at least one value.
///
/// `[1,5)` and `[5,10)` do not overlap; `[1,5]` and `[5,10]` do.
pub fn overlaps<T: RangeElement>(r1: &Range<T>, r2: &Range<T>) -> bool {
    if r1.is_empty() || r2.is_empty() {
        return false;
    }
    !(left_of(r1, r2) || left_of(r2, r1))
}

/// Whether `value` lies within `range`.
pub fn contains<T: RangeElement>(range: &Range<T>, value: T) -> bool {
    if range.is_empty() {
        return false;
    }
    let above_lower = value > range.lower || (value == range.lower && range.lower_inc);
    let below_upper = value < range.upper || (value == range.upper && range.upper_inc);
    above_lower && below_upper
}

/// [`contains`] with the operands swapped (`value <@ range`).
pub fn contained_by<T: RangeElement>(value: T, range: &Range<T>) -> bool {
    contains(range, value)
}

impl<T: RangeElement> Range<T> {
    /// Whether this range shares at least one value with `other`.
    pub fn overlaps(&self, other: &Range<T>) -> bool {
        overlaps(self, other)
    }

    /// Whether `value` lies within this range.
    pub fn contains(&self, value: T) -> bool {
        contains(self, value)
    }
}
