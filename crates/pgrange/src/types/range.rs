//! The range value model.
//!
//! Provides [`Range<T>`] and [`Bound<T>`] for the PostgreSQL-style range types
//! `int4range` ([`Int4Range`]) and `numrange` ([`NumRange`]).

use super::element::RangeElement;
use serde::{Deserialize, Serialize};

/// A view of one end of a range (inclusive or exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    /// The bound includes the value: `[value` or `value]`
    Inclusive(T),
    /// The bound excludes the value: `(value` or `value)`
    Exclusive(T),
}

impl<T> Bound<T> {
    fn new(value: T, inclusive: bool) -> Self {
        if inclusive {
            Bound::Inclusive(value)
        } else {
            Bound::Exclusive(value)
        }
    }

    /// Returns a reference to the inner value.
    pub fn value(&self) -> &T {
        match self {
            Bound::Inclusive(v) | Bound::Exclusive(v) => v,
        }
    }

    /// Returns `true` if this bound is inclusive.
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }

    /// Consumes the bound and returns the inner value.
    pub fn into_value(self) -> T {
        match self {
            Bound::Inclusive(v) | Bound::Exclusive(v) => v,
        }
    }
}

/// A range value: two bounds, each independently inclusive or exclusive.
///
/// No ordering is enforced between `lower` and `upper`; a range whose bounds
/// are out of order is simply empty (see [`Range::is_empty`]). Equality is
/// field-wise, so two empty ranges with different bounds are not `==`.
///
/// # Examples
///
/// ```
/// use pgrange::{Int4Range, NumRange};
///
/// // [1, 10) — half-open range (the default for constructors)
/// let r = Int4Range::new(1, 10);
/// assert!(r.contains(1) && !r.contains(10));
///
/// // [1.5, 2.5] — closed range
/// let r = NumRange::inclusive(1.5, 2.5);
/// assert!(r.contains(2.5));
///
/// // Canonical empty range
/// assert!(Int4Range::empty().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    /// Lower bound value.
    pub lower: T,
    /// Upper bound value.
    pub upper: T,
    /// Whether `lower` itself belongs to the range.
    pub lower_inc: bool,
    /// Whether `upper` itself belongs to the range.
    pub upper_inc: bool,
}

/// `int4range`
pub type Int4Range = Range<i32>;

/// `numrange`
pub type NumRange = Range<f64>;

impl<T: RangeElement> Range<T> {
    /// Creates a half-open range `[lower, upper)`.
    pub fn new(lower: T, upper: T) -> Self {
        Self::with_bounds(lower, upper, true, false)
    }

    /// Creates a range with explicit inclusivity flags.
    pub fn with_bounds(lower: T, upper: T, lower_inc: bool, upper_inc: bool) -> Self {
        Self {
            lower,
            upper,
            lower_inc,
            upper_inc,
        }
    }

    /// Creates a range from two bound views.
    pub fn from_bounds(lower: Bound<T>, upper: Bound<T>) -> Self {
        Self::with_bounds(
            *lower.value(),
            *upper.value(),
            lower.is_inclusive(),
            upper.is_inclusive(),
        )
    }

    /// Creates a closed range `[lower, upper]`.
    pub fn inclusive(lower: T, upper: T) -> Self {
        Self::with_bounds(lower, upper, true, true)
    }

    /// Creates an open range `(lower, upper)`.
    pub fn exclusive(lower: T, upper: T) -> Self {
        Self::with_bounds(lower, upper, false, false)
    }

    /// Creates a half-open range `(lower, upper]`.
    pub fn upper_inclusive(lower: T, upper: T) -> Self {
        Self::with_bounds(lower, upper, false, true)
    }

    /// The canonical empty range `(1,0)`, which is what `empty` parses to.
    pub fn empty() -> Self {
        Self::with_bounds(T::EMPTY_LOWER, T::EMPTY_UPPER, false, false)
    }

    /// Returns `true` if the range contains no values.
    ///
    /// A range is empty when `lower > upper`, or when the bounds are equal and
    /// not both inclusive. `[5,5]` is the only non-empty shape with equal bounds.
    pub fn is_empty(&self) -> bool {
        if self.lower > self.upper {
            return true;
        }
        if self.lower == self.upper {
            return !(self.lower_inc && self.upper_inc);
        }
        false
    }

    /// Returns the lower bound value.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound value.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` if the lower bound is inclusive.
    pub fn lower_inc(&self) -> bool {
        self.lower_inc
    }

    /// Returns `true` if the upper bound is inclusive.
    pub fn upper_inc(&self) -> bool {
        self.upper_inc
    }

    /// The lower end as a [`Bound`].
    pub fn lower_bound(&self) -> Bound<T> {
        Bound::new(self.lower, self.lower_inc)
    }

    /// The upper end as a [`Bound`].
    pub fn upper_bound(&self) -> Bound<T> {
        Bound::new(self.upper, self.upper_inc)
    }
}
