use std::time::Duration;

use resprobe::charts::{MAX_HEIGHT, MAX_OFFSET, MAX_WIDTH};
use resprobe::config::{parse_duration_value, parse_param};
use resprobe::error::ValidationError;

pub(super) fn parse_duration_arg(s: &str) -> Result<Duration, ValidationError> {
    parse_duration_value(s)
}

pub(super) fn parse_param_arg(s: &str) -> Result<(String, String), ValidationError> {
    parse_param(s)
}

pub(super) fn parse_chart_width(s: &str) -> Result<usize, ValidationError> {
    parse_bounded(s, 0, MAX_WIDTH)
}

pub(super) fn parse_chart_height(s: &str) -> Result<usize, ValidationError> {
    parse_bounded(s, 1, MAX_HEIGHT)
}

pub(super) fn parse_chart_offset(s: &str) -> Result<usize, ValidationError> {
    parse_bounded(s, 1, MAX_OFFSET)
}

fn parse_bounded(s: &str, min: usize, max: usize) -> Result<usize, ValidationError> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidNumber { source: err })?;
    if value < min {
        return Err(ValidationError::ValueTooSmall {
            min: u64::try_from(min).unwrap_or(u64::MAX),
        });
    }
    if value > max {
        return Err(ValidationError::ValueTooLarge {
            max: u64::try_from(max).unwrap_or(u64::MAX),
        });
    }
    Ok(value)
}
