use std::fmt;

use thiserror::Error;

/// Errors raised while reading `H:MM` clock values or `start-end` ranges.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TimeLabelError {
    #[error("Missing ':' in clock value {0:?}")]
    MissingColon(String),
    #[error("Invalid hour in clock value {0:?}")]
    InvalidHour(String),
    #[error("Invalid minutes in clock value {0:?}")]
    InvalidMinute(String),
    #[error("Missing '-' in time range {0:?}")]
    MissingDash(String),
}

/// Half of the day in 12-hour notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clock value rewritten for 12-hour display, e.g. `1:50` + `PM`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwelveHourTime {
    pub value: String,
    pub period: Period,
}

/// Parse a 24-hour `H:MM` value into `(hour, minute)`.
pub(crate) fn parse_clock(raw: &str) -> Result<(u32, u32), TimeLabelError> {
    let trimmed = raw.trim();
    let (hour, minute) = trimmed
        .split_once(':')
        .ok_or_else(|| TimeLabelError::MissingColon(trimmed.to_string()))?;
    let hour = hour
        .parse::<u32>()
        .ok()
        .filter(|hour| *hour < 24)
        .ok_or_else(|| TimeLabelError::InvalidHour(trimmed.to_string()))?;
    let minute = Some(minute)
        .filter(|minute| minute.len() == 2)
        .and_then(|minute| minute.parse::<u32>().ok())
        .filter(|minute| *minute < 60)
        .ok_or_else(|| TimeLabelError::InvalidMinute(trimmed.to_string()))?;
    Ok((hour, minute))
}

/// Convert a 24-hour `H:MM` boundary into 12-hour form.
///
/// Hour 0 reads as 12 AM and hour 12 as 12 PM.
pub fn to_twelve_hour(clock: &str) -> Result<TwelveHourTime, TimeLabelError> {
    let (hour, minute) = parse_clock(clock)?;
    let period = if hour < 12 { Period::Am } else { Period::Pm };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    Ok(TwelveHourTime {
        value: format!("{display_hour}:{minute:02}"),
        period,
    })
}

/// Format a `start-end` slot label in 12-hour notation.
///
/// The period is printed once when both ends share it (`1:50-2:40 PM`) and on
/// both ends otherwise (`11:30 AM-12:20 PM`). Labels that do not parse are
/// returned unchanged.
pub fn format_time_range_12h(range: &str) -> String {
    match format_range(range) {
        Ok(label) => label,
        Err(err) => {
            tracing::debug!("Leaving time label unformatted: {err}");
            range.to_string()
        }
    }
}

fn format_range(range: &str) -> Result<String, TimeLabelError> {
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| TimeLabelError::MissingDash(range.to_string()))?;
    let start = to_twelve_hour(start)?;
    let end = to_twelve_hour(end)?;
    if start.period == end.period {
        Ok(format!("{}-{} {}", start.value, end.value, end.period))
    } else {
        Ok(format!(
            "{} {}-{} {}",
            start.value, start.period, end.value, end.period
        ))
    }
}
