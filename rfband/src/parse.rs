//! Frequency string parser.
//!
//! A frequency is an optional sign followed by one or more mantissa/unit
//! pairs:
//!
//! ```text
//! [+-]? ( [0-9]* ( '.' [0-9]* )? [A-Za-z]+ )+
//! ```
//!
//! The first position in the input where this matches is used and anything
//! around the match is ignored, so `" 10MHz"` and `"10MHz5"` both read as
//! 10MHz. When the pair repeats, only the last one counts: `"1e6Hz"` is 6Hz.
//!
//! The value is truncated toward zero to a whole number of Hz after scaling.

use nom::{
    character::complete::{alpha1, char, digit0, one_of},
    combinator::{opt, recognize},
    multi::fold_many1,
    sequence::pair,
    IResult,
};

use crate::error::ParseError;
use crate::hz::Hz;
use crate::unit::Unit;

/// Raw pieces of a frequency string, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts<'a> {
    negative: bool,
    mantissa: &'a str,
    unit: &'a str,
}

fn sign(input: &str) -> IResult<&str, bool> {
    let (rest, sign) = opt(one_of("+-"))(input)?;
    Ok((rest, sign == Some('-')))
}

fn mantissa(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit0, opt(pair(char('.'), digit0))))(input)
}

/// Match at the start of `input`. Trailing input is left unconsumed.
fn parts(input: &str) -> IResult<&str, Parts<'_>> {
    let (rest, negative) = sign(input)?;
    let (rest, (mantissa, unit)) =
        fold_many1(pair(mantissa, alpha1), || ("", ""), |_, last| last)(rest)?;
    Ok((
        rest,
        Parts {
            negative,
            mantissa,
            unit,
        },
    ))
}

/// Leftmost match of [`parts`] anywhere in `input`.
fn find_parts(input: &str) -> Option<Parts<'_>> {
    input
        .char_indices()
        .find_map(|(offset, _)| parts(&input[offset..]).ok().map(|(_, parts)| parts))
}

/// Parse a frequency such as `"144.39MHz"`, `"-10Hz"` or `"2.4ghz"`.
///
/// Unit suffixes are matched without regard to case. Sub-Hz precision is
/// dropped: the scaled value is truncated toward zero.
///
/// # Errors
/// * [`ParseError::UnknownUnit`] if the suffix is not Hz, KHz, MHz, GHz or THz.
/// * [`ParseError::InvalidFrequency`] for anything else that is not a frequency,
///   including the empty string.
///
/// # Example
/// ```
/// use rfband::{parse_hz, Hz, ParseError};
///
/// assert_eq!(parse_hz("144.39MHz"), Ok(Hz::new(144_390_000.0)));
/// assert_eq!(parse_hz("-10Hz"), Ok(Hz::new(-10.0)));
/// assert_eq!(parse_hz("1.9999Hz"), Ok(Hz::new(1.0)));
/// assert_eq!(parse_hz("10PHz"), Err(ParseError::UnknownUnit("PHz".to_string())));
/// assert!(parse_hz("").is_err());
/// ```
pub fn parse_hz(input: &str) -> Result<Hz, ParseError> {
    let parts = find_parts(input).ok_or_else(|| {
        log::trace!("frequency {:?} does not match grammar", input);
        ParseError::InvalidFrequency(input.to_string())
    })?;

    let unit = Unit::from_suffix(parts.unit)
        .ok_or_else(|| ParseError::UnknownUnit(parts.unit.to_string()))?;

    let mantissa: f64 = parts.mantissa.parse().map_err(|e| {
        log::trace!("frequency {:?} has bad mantissa {:?}: {}", input, parts.mantissa, e);
        ParseError::InvalidFrequency(input.to_string())
    })?;

    let mut value = unit.scale() * mantissa;
    if parts.negative {
        value = -value;
    }

    Ok(Hz::new(value.trunc()))
}
