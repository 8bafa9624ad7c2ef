//! Time formatting (`fmttime`).

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use super::parameter_count;
use crate::error::EvalError;
use crate::function::MacroFunction;
use crate::parser::{TimeValue, UtcOffsetSpec, localize, parse_relative_time, parse_time_value};

/// Format a time value with a strftime-style format, optionally shifting it
/// by a relative time expression first.
///
/// The value is interpreted, shifted and rendered in `tz`. `now` supplies the
/// current day for values that only carry a time of day. An unsupported
/// format specifier renders as the empty string.
pub fn fmttime<Tz>(
    value: &str,
    parameters: &[String],
    tz: &Tz,
    now: DateTime<Utc>,
) -> Result<String, EvalError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (format, shift) = match parameters {
        [format] => (format, None),
        [format, shift] => (format, Some(shift)),
        _ => return Err(parameter_count(MacroFunction::Fmttime, "1 or 2", parameters)),
    };

    let invalid_value = || EvalError::InvalidValue {
        function: MacroFunction::Fmttime,
        value: value.to_string(),
    };
    let parsed = parse_time_value(value).map_err(|_| invalid_value())?;
    let mut time = instant(parsed, tz, now).ok_or_else(invalid_value)?;

    if let Some(shift) = shift {
        let expression = format!("now{shift}");
        let relative = parse_relative_time(&expression)
            .map_err(|_| EvalError::InvalidRelativeTime { expression })?;
        time = relative.resolve(time).ok_or(EvalError::TimeOutOfRange)?;
    }

    Ok(strftime(&time, format))
}

/// Resolve a parsed time value to an instant in `tz`.
fn instant<Tz: TimeZone>(value: TimeValue, tz: &Tz, now: DateTime<Utc>) -> Option<DateTime<Tz>> {
    match value {
        TimeValue::Timestamp(seconds) => {
            Some(DateTime::from_timestamp(seconds, 0)?.with_timezone(tz))
        }
        TimeValue::DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset,
        } => {
            let local =
                NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
            match offset {
                None => localize(tz, local),
                Some(UtcOffsetSpec::Utc) => Some(local.and_utc().with_timezone(tz)),
                Some(UtcOffsetSpec::Fixed {
                    negative,
                    hours,
                    minutes,
                }) => {
                    if minutes >= 60 {
                        return None;
                    }
                    let seconds = i32::try_from(hours * 3600 + minutes * 60).ok()?;
                    let seconds = if negative { -seconds } else { seconds };
                    let offset = FixedOffset::east_opt(seconds)?;
                    Some(offset.from_local_datetime(&local).single()?.with_timezone(tz))
                }
            }
        }
        TimeValue::TimeOfDay {
            hour,
            minute,
            second,
        } => {
            let today = now.with_timezone(tz).date_naive();
            localize(tz, today.and_hms_opt(hour, minute, second)?)
        }
    }
}

/// Render `time` with a strftime format, or the empty string if the format
/// uses an unsupported specifier.
fn strftime<Tz>(time: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return String::new();
    }

    let mut rendered = String::new();
    if write!(rendered, "{}", time.format_with_items(items.iter())).is_err() {
        return String::new();
    }
    rendered
}
