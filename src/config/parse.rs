use std::time::{Duration, Instant};

use crate::error::ValidationError;

/// Parse a duration such as `500ms`, `10s`, `2m` or `1h`; a bare number is
/// seconds.
///
/// # Errors
///
/// Returns an error when the value is empty, zero, overflows, or carries an
/// unknown unit.
pub fn parse_duration_value(value: &str) -> Result<Duration, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.as_millis() == 0 {
        return Err(ValidationError::DurationZero);
    }

    ensure_schedulable(duration)
}

/// Reject durations that cannot be added to the current instant; timers
/// built from them would overflow.
pub(crate) fn ensure_schedulable(duration: Duration) -> Result<Duration, ValidationError> {
    if Instant::now().checked_add(duration).is_none() {
        return Err(ValidationError::DurationOverflow);
    }
    Ok(duration)
}

/// Parse a `key=value` session parameter. The value may be empty.
///
/// # Errors
///
/// Returns an error when there is no `=` or the key is empty.
pub fn parse_param(s: &str) -> Result<(String, String), ValidationError> {
    match s.split_once('=') {
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() {
                return Err(ValidationError::ParamKeyEmpty {
                    value: s.to_owned(),
                });
            }
            Ok((key.to_owned(), value.trim().to_owned()))
        }
        None => Err(ValidationError::InvalidParamFormat {
            value: s.to_owned(),
        }),
    }
}
