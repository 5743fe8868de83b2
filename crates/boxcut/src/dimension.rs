//! Parsing of user-supplied dimension strings.
//!
//! A dimension is a non-negative decimal number optionally followed by a unit,
//! e.g. `50`, `50mm`, `2.5 cm` or `1in`. Values are converted to millimeters,
//! the unit used by every later stage.
//!
//! # Grammar
//!
//! ```text
//! dimension = ws* number ws* unit? ws*
//! number    = [0-9.]+
//! unit      = [a-zA-Z]+
//! ```
//!
//! Recognized units (case-insensitive):
//!
//! | Unit         | Spellings                          | Factor |
//! |--------------|------------------------------------|--------|
//! | Millimeter   | `mm`, `millimeter`, `millimeters`  | 1      |
//! | Centimeter   | `cm`, `centimeter`, `centimeters`  | 10     |
//! | Inch         | `in`, `inch`, `inches`             | 25.4   |
//!
//! A missing unit means millimeters.

use std::{fmt, ops::Range, str::FromStr};

use thiserror::Error;
use winnow::{
    Parser as _,
    ascii::{alpha0, multispace0},
    error::{ContextError, ErrMode},
    token::take_while,
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A length unit accepted in dimension strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Millimeter,
    Centimeter,
    Inch,
}

impl Unit {
    /// Converts `value` in this unit to millimeters.
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Self::Millimeter => value,
            Self::Centimeter => value * 10.0,
            Self::Inch => value * 25.4,
        }
    }

    /// Returns the short symbol of this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Inch => "in",
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "in" | "inch" | "inches" => Ok(Self::Inch),
            _ => Err(format!("unsupported unit `{s}`")),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed dimension, normalized to millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    value_mm: f64,
    unit: Unit,
}

impl Dimension {
    /// Creates a dimension from a value expressed in `unit`.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self {
            value_mm: unit.to_mm(value),
            unit,
        }
    }

    /// The value in millimeters.
    pub fn value_mm(&self) -> f64 {
        self.value_mm
    }

    /// The unit the value was written in.
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dimension(s)
    }
}

/// Errors produced while parsing a dimension string.
///
/// Every variant carries the byte span of the offending text within the
/// original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("invalid dimension format `{input}`")]
    InvalidFormat { input: String, span: Range<usize> },

    #[error("invalid number `{number}`")]
    InvalidNumber { number: String, span: Range<usize> },

    #[error("unsupported unit `{unit}`")]
    UnsupportedUnit { unit: String, span: Range<usize> },

    #[error("unexpected trailing input `{rest}`")]
    TrailingInput { rest: String, span: Range<usize> },
}

impl DimensionError {
    /// Byte range of the offending text in the parsed input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::InvalidFormat { span, .. }
            | Self::InvalidNumber { span, .. }
            | Self::UnsupportedUnit { span, .. }
            | Self::TrailingInput { span, .. } => span.clone(),
        }
    }

    /// A short hint on how to fix the input.
    pub fn help(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "expected a number such as `50`, `5cm` or `2in`",
            Self::InvalidNumber { .. } => "use a single decimal point, e.g. `12.5`",
            Self::UnsupportedUnit { .. } => "supported units are mm, cm and in",
            Self::TrailingInput { .. } => "remove the text after the unit",
        }
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn whitespace<'s>(input: &mut &'s str) -> IResult<&'s str> {
    multispace0.parse_next(input)
}

fn number_literal<'s>(input: &mut &'s str) -> IResult<&'s str> {
    take_while(1.., is_number_char).parse_next(input)
}

fn unit_literal<'s>(input: &mut &'s str) -> IResult<&'s str> {
    alpha0.parse_next(input)
}

/// Byte offset of `rest` within `src`, where `rest` is a suffix of `src`.
fn offset(src: &str, rest: &str) -> usize {
    src.len() - rest.len()
}

/// Parses a dimension string such as `"2.5cm"` into millimeters.
///
/// # Errors
///
/// Returns a [`DimensionError`] when no number is present, the number is
/// malformed or not finite, the unit is unknown, or text follows the unit.
///
/// # Examples
///
/// ```
/// use boxcut::dimension::{Unit, parse_dimension};
///
/// let dimension = parse_dimension("2.5 cm").unwrap();
/// assert_eq!(dimension.value_mm(), 25.0);
/// assert_eq!(dimension.unit(), Unit::Centimeter);
///
/// assert_eq!(parse_dimension("40").unwrap().value_mm(), 40.0);
/// assert!(parse_dimension("5 furlongs").is_err());
/// ```
pub fn parse_dimension(src: &str) -> Result<Dimension, DimensionError> {
    let invalid_format = || DimensionError::InvalidFormat {
        input: src.to_string(),
        span: 0..src.len(),
    };

    let mut input = src;
    whitespace(&mut input).map_err(|_| invalid_format())?;

    let number_start = offset(src, input);
    let number = number_literal(&mut input).map_err(|_| invalid_format())?;
    let number_span = number_start..number_start + number.len();

    let value = number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DimensionError::InvalidNumber {
            number: number.to_string(),
            span: number_span,
        })?;

    whitespace(&mut input).map_err(|_| invalid_format())?;

    let unit_start = offset(src, input);
    let unit_text = unit_literal(&mut input).map_err(|_| invalid_format())?;
    let unit_span = unit_start..unit_start + unit_text.len();

    whitespace(&mut input).map_err(|_| invalid_format())?;

    if !input.is_empty() {
        return Err(DimensionError::TrailingInput {
            rest: input.to_string(),
            span: offset(src, input)..src.len(),
        });
    }

    let unit = if unit_text.is_empty() {
        Unit::Millimeter
    } else {
        unit_text
            .parse::<Unit>()
            .map_err(|_| DimensionError::UnsupportedUnit {
                unit: unit_text.to_string(),
                span: unit_span,
            })?
    };

    Ok(Dimension::new(value, unit))
}
