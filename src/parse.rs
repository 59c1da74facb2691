use nom::character::complete::{digit0, digit1};
use nom::error::{make_error, ErrorKind};
use nom::sequence::preceded;
use nom::{
    branch::alt,
    character::complete::char as char_parser,
    combinator::opt,
    IResult,
};
use rust_decimal::Decimal;

use crate::errors::TrackerError;

/// Largest accepted whole part of an amount.
const MAX_WHOLE: u64 = 1_000_000_000_000;

fn separator_parser(input: &str) -> IResult<&str, ()> {
    alt((char_parser(','), char_parser('.')))(input).map(|(input, _)| (input, ()))
}

/// Returns the cents and whether any digit followed the separator.
fn after_separator_parser(input: &str) -> IResult<&str, (i64, bool)> {
    let (rest, digits) = digit0(input)?;
    let cents = match digits.as_bytes() {
        [] => 0,
        [d] => i64::from(d - b'0') * 10,
        [d1, d2] => i64::from(d1 - b'0') * 10 + i64::from(d2 - b'0'),
        _ => return Err(nom::Err::Failure(make_error(input, ErrorKind::Verify))),
    };
    Ok((rest, (cents, !digits.is_empty())))
}

fn decimals_parser(input: &str) -> IResult<&str, (i64, bool)> {
    preceded(separator_parser, after_separator_parser)(input)
}

/// Whole part of an amount, `TooLarge` once it passes `MAX_WHOLE` or overflows.
fn whole_parser(input: &str) -> IResult<&str, u64> {
    let (rest, digits) = digit1(input)?;
    match digits.parse::<u64>() {
        Ok(whole) if whole <= MAX_WHOLE => Ok((rest, whole)),
        _ => Err(nom::Err::Failure(make_error(input, ErrorKind::TooLarge))),
    }
}

fn amount_parser(input: &str) -> IResult<&str, Decimal> {
    let (input, negative) = opt(char_parser('-'))(input)?;
    let (input, whole) = opt(whole_parser)(input)?;
    let (input, decimals) = opt(decimals_parser)(input)?;
    let has_decimal_digits = decimals.is_some_and(|(_, any)| any);
    if whole.is_none() && !has_decimal_digits {
        return Err(nom::Err::Error(make_error(input, ErrorKind::Digit)));
    }

    let whole = whole.unwrap_or(0) as i64;
    let cents = decimals.map(|(cents, _)| cents).unwrap_or(0);
    let value = Decimal::new(whole * 100 + cents, 2);
    if negative.is_some() && !value.is_zero() {
        Ok((input, -value))
    } else {
        Ok((input, value))
    }
}

fn reason(kind: ErrorKind) -> String {
    match kind {
        ErrorKind::Digit => "expected a number".to_string(),
        ErrorKind::Verify => "at most two decimals are allowed".to_string(),
        ErrorKind::TooLarge => "amount is too large".to_string(),
        other => other.description().to_string(),
    }
}

/// Parses a money amount such as `1200`, `-3.5` or `12,75`.
pub fn parse_amount(s: &str) -> Result<Decimal, TrackerError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TrackerError::Parse("no amount given".to_string()));
    }
    match amount_parser(s) {
        Ok(("", value)) => Ok(value),
        Ok((_, _)) => Err(TrackerError::Parse("unexpected characters".to_string())),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(TrackerError::Parse(reason(e.code)))
        }
        Err(e) => Err(TrackerError::Parse(e.to_string())),
    }
}
