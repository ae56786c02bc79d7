//! nom parsers for textual style values and keywords.
//!
//! Hosts that receive styles as strings (inspector panels, JSON fixtures)
//! use these to turn `"10px"`, `"auto"` or `"4 8"` into engine values.

use crate::flex::{Align, Direction, FlexDirection, FlexWrap, JustifyContent, Keyword, PositionType};
use flexlay_types::{Edge, UNDEFINED};
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, map, opt, value};
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::delimited;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn parse_unit(input: &str) -> IResult<&str, ()> {
    value((), alt((tag_no_case("px"), tag_no_case("pt"), tag_no_case("dp")))).parse(input)
}

/// Parses a length with an optional unit suffix. `auto` and `undefined`
/// yield the undefined sentinel.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    alt((
        value(UNDEFINED, alt((tag_no_case("auto"), tag_no_case("undefined")))),
        map((float, opt(parse_unit)), |(v, _)| v),
    ))
    .parse(input)
}

/// Parses a whole string as a single length.
pub fn parse_length_value(input: &str) -> Result<f32, StyleParseError> {
    all_consuming(delimited(space0, parse_length, space0))
        .parse(input)
        .map(|(_, v)| v)
        .map_err(|e| StyleParseError::Parse(format!("Invalid length '{}': {}", input, e)))
}

/// Parses CSS-style spacing shorthand into edge assignments.
///
/// One value sets `All`, two set `Vertical` and `Horizontal`, four set
/// `Top`, `Right`, `Bottom` and `Left` in that order.
pub fn parse_spacing_shorthand(input: &str) -> Result<Vec<(Edge, f32)>, StyleParseError> {
    let parsed = all_consuming(delimited(space0, separated_list1(space1, parse_length), space0))
        .parse(input)
        .map_err(|e| StyleParseError::Parse(format!("Invalid spacing '{}': {}", input, e)))?;
    let parts = parsed.1;

    match parts.as_slice() {
        [all] => Ok(vec![(Edge::All, *all)]),
        [vertical, horizontal] => Ok(vec![(Edge::Vertical, *vertical), (Edge::Horizontal, *horizontal)]),
        [top, right, bottom, left] => Ok(vec![
            (Edge::Top, *top),
            (Edge::Right, *right),
            (Edge::Bottom, *bottom),
            (Edge::Left, *left),
        ]),
        _ => Err(StyleParseError::Parse(format!(
            "Invalid number of values for spacing shorthand: got {}, expected 1, 2, or 4.",
            parts.len()
        ))),
    }
}

/// Looks up a keyword by its textual name, case-insensitively.
pub fn parse_keyword<K: Keyword>(input: &str) -> Result<K, StyleParseError> {
    let trimmed = input.trim();
    K::VARIANTS
        .iter()
        .copied()
        .find(|k| k.as_str().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| StyleParseError::InvalidValue {
            property: K::PROPERTY.to_string(),
            value: input.to_string(),
        })
}

macro_rules! impl_keyword_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = StyleParseError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_keyword(s)
                }
            }
        )*
    };
}

impl_keyword_from_str!(Direction, FlexDirection, JustifyContent, Align, PositionType, FlexWrap);
