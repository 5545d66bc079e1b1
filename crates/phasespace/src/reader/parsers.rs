//! Library of parser functions for columnar text inputs

// nom parser combinators
use nom::character::complete::{space0, space1};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::delimited;
use nom::IResult;

/// Check for lines with nothing to read, i.e. blank or `#` comments
pub(crate) fn is_skipped(i: &str) -> bool {
    let i = i.trim_start();
    i.is_empty() || i.starts_with('#')
}

/// Parse a full line of whitespace separated numbers
///
/// Anything left over that is not a number is an error, so tokens like
/// `1.0.5` or `1,2` are rejected rather than split.
pub(crate) fn whitespace_row(i: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(delimited(
        space0,
        separated_list1(space1, double),
        space0,
    ))(i)
}

/// The first whitespace separated token the parser choked on
pub(crate) fn offending_token(line: &str) -> String {
    line.split_whitespace()
        .find(|token| whitespace_row(token).is_err())
        .unwrap_or(line.trim())
        .to_string()
}
