//! Range value types.
//!
//! This module provides the in-memory range value and the bound scalar trait
//! it is generic over.

mod element;
mod range;

pub use element::{RangeElement, RangeType};
pub use range::{Bound, Int4Range, NumRange, Range};
