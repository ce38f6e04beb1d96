//! Range literals: `[lower,upper)` style text and the `empty` keyword.

use crate::error::{RangeError, RangeResult};
use crate::types::{Range, RangeElement};
use std::fmt;
use std::str::FromStr;

const EMPTY_LITERAL: &str = "empty";

/// Default number of digits after the decimal point for fractional bounds.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Options for rendering range literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Fixed digits after the decimal point for `numrange` bounds.
    pub float_precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

impl FormatOptions {
    /// Create options with defaults (6 fractional digits).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of fractional digits for `numrange` bounds.
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }
}

/// Two-character bounds shorthand accepted by the 3-argument constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundsNotation {
    /// `[)`
    #[default]
    LowerInc,
    /// `[]`
    Both,
    /// `(]`
    UpperInc,
    /// `()`
    Neither,
}

impl BoundsNotation {
    /// Parse a bounds token. An empty token means the default `[)`.
    pub fn parse(token: &str) -> RangeResult<Self> {
        match token {
            "" | "[)" => Ok(Self::LowerInc),
            "[]" => Ok(Self::Both),
            "(]" => Ok(Self::UpperInc),
            "()" => Ok(Self::Neither),
            other => Err(RangeError::InvalidBoundsNotation(other.to_string())),
        }
    }

    /// Build the notation from inclusivity flags.
    pub fn from_flags(lower_inc: bool, upper_inc: bool) -> Self {
        match (lower_inc, upper_inc) {
            (true, false) => Self::LowerInc,
            (true, true) => Self::Both,
            (false, true) => Self::UpperInc,
            (false, false) => Self::Neither,
        }
    }

    /// Whether the lower bound is inclusive.
    pub fn lower_inc(self) -> bool {
        matches!(self, Self::LowerInc | Self::Both)
    }

    /// Whether the upper bound is inclusive.
    pub fn upper_inc(self) -> bool {
        matches!(self, Self::UpperInc | Self::Both)
    }

    /// The two-character token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowerInc => "[)",
            Self::Both => "[]",
            Self::UpperInc => "(]",
            Self::Neither => "()",
        }
    }
}

impl fmt::Display for BoundsNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundsNotation {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a range literal.
///
/// Accepts `empty` (any case) or `<[|(><lower>,<upper><]|)>`. The first comma
/// separates the bounds; no whitespace is trimmed.
pub fn parse<T: RangeElement>(literal: &str) -> RangeResult<Range<T>> {
    parse_inner(literal).inspect_err(|err| {
        tracing::debug!(
            target: "pgrange.text",
            range_type = T::RANGE_TYPE.name(),
            literal,
            error = %err,
            "rejected range literal"
        );
    })
}

fn parse_inner<T: RangeElement>(s: &str) -> RangeResult<Range<T>> {
    if s.eq_ignore_ascii_case(EMPTY_LITERAL) {
        return Ok(Range::empty());
    }

    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return Err(RangeError::malformed(s));
    }

    let lower_inc = match bytes[0] {
        b'[' => true,
        b'(' => false,
        _ => return Err(RangeError::malformed(s)),
    };
    let upper_inc = match bytes[bytes.len() - 1] {
        b']' => true,
        b')' => false,
        _ => return Err(RangeError::malformed(s)),
    };

    // Delimiters are ASCII, so these slice boundaries are char boundaries.
    let body = &s[1..s.len() - 1];
    let Some((lower_str, upper_str)) = body.split_once(',') else {
        return Err(RangeError::malformed_because(s, "missing comma"));
    };

    let type_name = T::RANGE_TYPE.scalar_name();
    let lower = T::parse_literal(lower_str).ok_or_else(|| RangeError::invalid_scalar(s, type_name))?;
    let upper = T::parse_literal(upper_str).ok_or_else(|| RangeError::invalid_scalar(s, type_name))?;

    Ok(Range::with_bounds(lower, upper, lower_inc, upper_inc))
}

/// Render a range literal with default options.
pub fn format<T: RangeElement>(range: &Range<T>) -> String {
    format_with(range, &FormatOptions::default())
}

/// Render a range literal.
///
/// Every empty range, canonical or not, renders as `empty`.
pub fn format_with<T: RangeElement>(range: &Range<T>, opts: &FormatOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_literal(range, opts.float_precision, &mut out);
    out
}

fn write_literal<T: RangeElement>(
    range: &Range<T>,
    precision: usize,
    out: &mut dyn fmt::Write,
) -> fmt::Result {
    if range.is_empty() {
        return out.write_str(EMPTY_LITERAL);
    }
    out.write_char(if range.lower_inc { '[' } else { '(' })?;
    range.lower.write_literal(out, precision)?;
    out.write_char(',')?;
    range.upper.write_literal(out, precision)?;
    out.write_char(if range.upper_inc { ']' } else { ')' })
}

impl<T: RangeElement> Range<T> {
    /// Build a range from a bounds notation token such as `"[]"`.
    pub fn with_notation(lower: T, upper: T, notation: &str) -> RangeResult<Self> {
        let n = BoundsNotation::parse(notation)?;
        Ok(Self::with_bounds(lower, upper, n.lower_inc(), n.upper_inc()))
    }

    /// The bounds notation of this range.
    pub fn notation(&self) -> BoundsNotation {
        BoundsNotation::from_flags(self.lower_inc, self.upper_inc)
    }

    /// Render with explicit options.
    pub fn to_text_with(&self, opts: &FormatOptions) -> String {
        format_with(self, opts)
    }
}

impl<T: RangeElement> fmt::Display for Range<T> {
    /// Uses the formatter's precision (`{:.2}`) when given, otherwise 6 digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_FLOAT_PRECISION);
        write_literal(self, precision, f)
    }
}

impl<T: RangeElement> FromStr for Range<T> {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Int4Range, NumRange};

    #[test]
    fn parse_int_literals() {
        assert_eq!(parse::<i32>("[1,10)").unwrap(), Int4Range::new(1, 10));
        assert_eq!(parse::<i32>("(1,10]").unwrap(), Int4Range::upper_inclusive(1, 10));
        assert_eq!(parse::<i32>("[-5,-1]").unwrap(), Int4Range::inclusive(-5, -1));
        assert_eq!(parse::<i32>("(0,0)").unwrap(), Int4Range::exclusive(0, 0));
    }

    #[test]
    fn parse_keeps_inverted_bounds() {
        let r = parse::<i32>("[10,1)").unwrap();
        assert_eq!((r.lower, r.upper), (10, 1));
        assert!(r.is_empty());
    }

    #[test]
    fn parse_float_literals() {
        assert_eq!(parse::<f64>("[1.5,2.5)").unwrap(), NumRange::new(1.5, 2.5));
        assert_eq!(parse::<f64>("(1e2,2E3]").unwrap(), NumRange::upper_inclusive(100.0, 2000.0));
        assert_eq!(parse::<f64>("[0,1]").unwrap(), NumRange::inclusive(0.0, 1.0));
    }

    #[test]
    fn parse_empty_any_case() {
        for s in ["empty", "EMPTY", "Empty", "eMpTy"] {
            assert_eq!(parse::<i32>(s).unwrap(), Int4Range::empty());
            assert_eq!(parse::<f64>(s).unwrap(), NumRange::empty());
        }
    }

    #[test]
    fn parse_rejects_bad_grammar() {
        for s in ["", "[]", "[1", "1,10)", "[1,10", "{1,10}", "[1 10)", "empty "] {
            let err = parse::<i32>(s).unwrap_err();
            assert!(err.is_malformed_literal(), "{s}: {err}");
        }
        assert_eq!(
            parse::<i32>("[1 10)").unwrap_err(),
            RangeError::malformed_because("[1 10)", "missing comma")
        );
    }

    #[test]
    fn parse_rejects_bad_scalars() {
        for s in ["[a,10)", "[1,b)", "[,10)", "[1,)", "[ 1,10)", "[1,2,3)", "[1.5,2)", "[1,99999999999)"] {
            let err = parse::<i32>(s).unwrap_err();
            assert!(err.is_invalid_scalar(), "{s}: {err}");
        }
        assert!(parse::<f64>("[1,x)").unwrap_err().is_invalid_scalar());
    }

    #[test]
    fn parse_rejects_non_ascii_delimiters() {
        assert!(parse::<i32>("【1,2】").unwrap_err().is_malformed_literal());
    }

    #[test]
    fn format_literals() {
        assert_eq!(format(&Int4Range::new(1, 10)), "[1,10)");
        assert_eq!(format(&Int4Range::inclusive(-3, 3)), "[-3,3]");
        assert_eq!(format(&Int4Range::exclusive(1, 10)), "(1,10)");
        assert_eq!(format(&Int4Range::inclusive(5, 5)), "[5,5]");
        assert_eq!(format(&NumRange::new(1.5, 2.0)), "[1.500000,2.000000)");
    }

    #[test]
    fn format_any_empty_as_keyword() {
        assert_eq!(format(&Int4Range::empty()), "empty");
        assert_eq!(format(&Int4Range::new(5, 1)), "empty");
        assert_eq!(format(&Int4Range::exclusive(5, 5)), "empty");
        assert_eq!(format(&NumRange::new(2.0, 1.0)), "empty");
    }

    #[test]
    fn format_options() {
        let opts = FormatOptions::new().with_float_precision(2);
        assert_eq!(NumRange::new(1.5, 2.0).to_text_with(&opts), "[1.50,2.00)");
        assert_eq!(Int4Range::new(1, 2).to_text_with(&opts), "[1,2)");
        assert_eq!(FormatOptions::default().float_precision, 6);
    }

    #[test]
    fn display_and_from_str() {
        let r: NumRange = "(0.5,1]".parse().unwrap();
        assert_eq!(r.to_string(), "(0.500000,1.000000]");
        assert_eq!(format!("{r:.1}"), "(0.5,1.0]");

        let r: Int4Range = "EMPTY".parse().unwrap();
        assert_eq!(r.to_string(), "empty");
    }

    #[test]
    fn text_roundtrip() {
        for s in ["[1,10)", "(1,10]", "[5,5]", "(-20,0)", "empty"] {
            let r = parse::<i32>(s).unwrap();
            assert_eq!(format(&r), s);
        }

        // Empty shapes normalize to the keyword.
        assert_eq!(format(&parse::<i32>("(5,5)").unwrap()), "empty");
        assert_eq!(format(&parse::<i32>("Empty").unwrap()), "empty");
    }

    #[test]
    fn bounds_notation() {
        assert_eq!(BoundsNotation::parse("").unwrap(), BoundsNotation::LowerInc);
        assert_eq!(BoundsNotation::parse("[)").unwrap(), BoundsNotation::LowerInc);
        assert_eq!(BoundsNotation::parse("[]").unwrap(), BoundsNotation::Both);
        assert_eq!(BoundsNotation::parse("(]").unwrap(), BoundsNotation::UpperInc);
        assert_eq!(BoundsNotation::parse("()").unwrap(), BoundsNotation::Neither);
        assert_eq!(
            BoundsNotation::parse("[[").unwrap_err(),
            RangeError::InvalidBoundsNotation("[[".into())
        );
        assert!(BoundsNotation::parse("[ )").is_err());

        for n in [
            BoundsNotation::LowerInc,
            BoundsNotation::Both,
            BoundsNotation::UpperInc,
            BoundsNotation::Neither,
        ] {
            assert_eq!(BoundsNotation::from_flags(n.lower_inc(), n.upper_inc()), n);
            assert_eq!(n.to_string().parse::<BoundsNotation>().unwrap(), n);
        }
    }

    #[test]
    fn with_notation() {
        assert_eq!(Int4Range::with_notation(1, 5, "[]").unwrap(), Int4Range::inclusive(1, 5));
        assert_eq!(Int4Range::with_notation(1, 5, "").unwrap(), Int4Range::new(1, 5));
        assert_eq!(Int4Range::inclusive(1, 5).notation(), BoundsNotation::Both);
        assert!(Int4Range::with_notation(1, 5, "<>").unwrap_err().is_invalid_bounds_notation());
    }
}
