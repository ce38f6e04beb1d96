//! # pgrange
//!
//! PostgreSQL-style range types: `int4range` over `i32` and `numrange` over `f64`.
//!
//! ## Features
//!
//! - **One generic model**: [`Range<T>`] over any [`RangeElement`], so both range
//!   types share a single predicate engine, codec and parser
//! - **Bit-exact encoding**: fixed-width `lower | upper | flags` layout (9 or 17 bytes)
//! - **Text literals**: `[1,10)`, `(0.5,2]`, and the case-insensitive `empty`
//! - **Predicates**: emptiness, overlap, containment
//! - **Host glue**: functions over serialized bytes, a tagged blob wrapper and
//!   null-aware batch executors
//!
//! ## Example
//!
//! ```
//! use pgrange::{codec, Int4Range};
//!
//! let a: Int4Range = "[2020,2023)".parse()?;
//! let b = Int4Range::new(2022, 2025);
//! assert!(a.overlaps(&b));
//!
//! let bytes = codec::to_bytes(&a);
//! assert_eq!(bytes.len(), 9);
//! assert_eq!(codec::deserialize::<i32>(&bytes)?.to_string(), "[2020,2023)");
//! # Ok::<(), pgrange::RangeError>(())
//! ```

pub mod blob;
pub mod codec;
pub mod error;
pub mod exec;
pub mod functions;
pub mod predicate;
pub mod text;
pub mod types;

pub use blob::RangeBlob;
pub use error::{RangeError, RangeResult};
pub use text::{BoundsNotation, FormatOptions};
pub use types::{Bound, Int4Range, NumRange, Range, RangeElement, RangeType};
