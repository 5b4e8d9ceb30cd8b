use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::ParseError;

/// Separator between the six components of a query date-time.
const SEPARATOR: char = '-';

/// Format used when echoing parsed date-times back to clients.
pub const ECHO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `hh-mm-ss-dd-mm-yyyy` into a naive date-time.
///
/// Components are read in the fixed order hour, minute, second, day, month, year.
/// No timezone is attached.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, ParseError> {
    let tokens: Vec<&str> = input.split(SEPARATOR).collect();
    if tokens.len() != 6 {
        return Err(ParseError::TokenCount(tokens.len()));
    }

    let mut values = [0u32; 6];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = token
            .trim()
            .parse::<u32>()
            .map_err(|e| ParseError::not_an_integer(token, e))?;
    }
    let [hour, minute, second, day, month, year] = values;

    if !(1..=9999).contains(&year) {
        return Err(ParseError::OutOfRange(format!(
            "year {} is out of range",
            year
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(ParseError::OutOfRange(
            "month must be in 1..12".to_string(),
        ));
    }
    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        ParseError::OutOfRange("day is out of range for month".to_string())
    })?;
    date.and_hms_opt(hour, minute, second).ok_or_else(|| {
        ParseError::OutOfRange(format!(
            "time {:02}:{:02}:{:02} is out of range",
            hour, minute, second
        ))
    })
}

pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(ECHO_FORMAT).to_string()
}
