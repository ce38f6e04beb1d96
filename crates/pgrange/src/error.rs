//! Error types for pgrange

use thiserror::Error;

/// Result type alias for range operations
pub type RangeResult<T> = Result<T, RangeError>;

/// Errors raised while building, decoding or parsing range values.
///
/// Predicates and accessors on an already decoded [`Range`](crate::Range) never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Binary payload is shorter than the fixed width of the range type
    #[error("Invalid {type_name} blob: expected {expected} bytes, got {actual}")]
    MalformedEncoding {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Text does not follow the `[lower,upper)` / `empty` grammar
    #[error("Malformed range literal: \"{literal}\"{}", reason_suffix(.reason))]
    MalformedLiteral {
        literal: String,
        reason: Option<&'static str>,
    },

    /// A bound substring is not a valid scalar literal
    #[error("Invalid {type_name} bound in range literal: \"{literal}\"")]
    InvalidScalar {
        literal: String,
        type_name: &'static str,
    },

    /// Unknown two-character bounds token
    #[error("Invalid bounds: {0}")]
    InvalidBoundsNotation(String),

    /// A tagged value was decoded as the wrong range type
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Batch arguments of different lengths
    #[error("Batch length mismatch: expected {expected} rows, got {actual}")]
    BatchLength { expected: usize, actual: usize },
}

fn reason_suffix(reason: &Option<&'static str>) -> String {
    match reason {
        Some(r) => format!(" ({r})"),
        None => String::new(),
    }
}

impl RangeError {
    /// Create a malformed literal error without a specific reason
    pub fn malformed(literal: impl Into<String>) -> Self {
        Self::MalformedLiteral {
            literal: literal.into(),
            reason: None,
        }
    }

    /// Create a malformed literal error with a short reason
    pub fn malformed_because(literal: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedLiteral {
            literal: literal.into(),
            reason: Some(reason),
        }
    }

    /// Create an invalid scalar error
    pub fn invalid_scalar(literal: impl Into<String>, type_name: &'static str) -> Self {
        Self::InvalidScalar {
            literal: literal.into(),
            type_name,
        }
    }

    /// Check if this is a malformed encoding error
    pub fn is_malformed_encoding(&self) -> bool {
        matches!(self, Self::MalformedEncoding { .. })
    }

    /// Check if this is a malformed literal error
    pub fn is_malformed_literal(&self) -> bool {
        matches!(self, Self::MalformedLiteral { .. })
    }

    /// Check if this is an invalid scalar error
    pub fn is_invalid_scalar(&self) -> bool {
        matches!(self, Self::InvalidScalar { .. })
    }

    /// Check if this is an invalid bounds notation error
    pub fn is_invalid_bounds_notation(&self) -> bool {
        matches!(self, Self::InvalidBoundsNotation(_))
    }
}
