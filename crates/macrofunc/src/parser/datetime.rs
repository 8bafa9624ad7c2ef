//! Time values accepted by the time-formatting function.
//!
//! Three shapes are recognized:
//! - `1700000000`: Unix timestamp in seconds
//! - `2024-01-15T10:30:00`, optionally followed by `Z`, `+hh`, `+hhmm` or `+hh:mm`
//! - `10:30:00`: a time of the current day

use winnow::ascii::digit1;
use winnow::combinator::{alt, eof, opt, preceded, terminated};
use winnow::prelude::*;
use winnow::stream::AsChar;
use winnow::token::{one_of, take_while};

use super::ParseError;
use super::parse_complete;

/// UTC offset suffix of an ISO-8601 date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtcOffsetSpec {
    /// `Z`
    Utc,
    /// `+hh`, `+hhmm` or `+hh:mm` (or the `-` forms).
    Fixed {
        negative: bool,
        hours: u32,
        minutes: u32,
    },
}

/// A syntactically valid time value. Field ranges are not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeValue {
    Timestamp(i64),
    DateTime {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        offset: Option<UtcOffsetSpec>,
    },
    TimeOfDay {
        hour: u32,
        minute: u32,
        second: u32,
    },
}

/// Parse a complete time value.
pub fn parse_time_value(input: &str) -> Result<TimeValue, ParseError> {
    parse_complete(input, time_value)
}

fn time_value(input: &mut &str) -> ModalResult<TimeValue> {
    alt((
        terminated(timestamp, eof),
        terminated(date_time, eof),
        terminated(time_of_day, eof),
    ))
    .parse_next(input)
}

fn timestamp(input: &mut &str) -> ModalResult<TimeValue> {
    digit1
        .try_map(str::parse::<i64>)
        .map(TimeValue::Timestamp)
        .parse_next(input)
}

fn date_time(input: &mut &str) -> ModalResult<TimeValue> {
    let year = four_digits(input)?;
    let month = preceded('-', two_digits).parse_next(input)?;
    let day = preceded('-', two_digits).parse_next(input)?;
    let (hour, minute, second) = preceded('T', clock).parse_next(input)?;
    let offset = opt(utc_offset).parse_next(input)?;
    Ok(TimeValue::DateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        offset,
    })
}

fn time_of_day(input: &mut &str) -> ModalResult<TimeValue> {
    clock
        .map(|(hour, minute, second)| TimeValue::TimeOfDay {
            hour,
            minute,
            second,
        })
        .parse_next(input)
}

fn clock(input: &mut &str) -> ModalResult<(u32, u32, u32)> {
    (two_digits, preceded(':', two_digits), preceded(':', two_digits)).parse_next(input)
}

fn utc_offset(input: &mut &str) -> ModalResult<UtcOffsetSpec> {
    alt((
        'Z'.value(UtcOffsetSpec::Utc),
        (
            one_of(['+', '-']),
            two_digits,
            opt(preceded(opt(':'), two_digits)),
        )
            .map(|(sign, hours, minutes)| UtcOffsetSpec::Fixed {
                negative: sign == '-',
                hours,
                minutes: minutes.unwrap_or(0),
            }),
    ))
    .parse_next(input)
}

fn four_digits(input: &mut &str) -> ModalResult<i32> {
    take_while(4, AsChar::is_dec_digit)
        .try_map(str::parse::<i32>)
        .parse_next(input)
}

fn two_digits(input: &mut &str) -> ModalResult<u32> {
    take_while(2, AsChar::is_dec_digit)
        .try_map(str::parse::<u32>)
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_values() {
        assert_eq!(
            parse_time_value("1700000000"),
            Ok(TimeValue::Timestamp(1_700_000_000))
        );
        assert_eq!(parse_time_value("0"), Ok(TimeValue::Timestamp(0)));
        assert!(parse_time_value("99999999999999999999").is_err());
    }

    #[test]
    fn iso_values() {
        assert_eq!(
            parse_time_value("2024-01-15T10:30:05"),
            Ok(TimeValue::DateTime {
                year: 2024,
                month: 1,
                day: 15,
                hour: 10,
                minute: 30,
                second: 5,
                offset: None,
            })
        );
        let offsets = [
            ("Z", UtcOffsetSpec::Utc),
            (
                "+02",
                UtcOffsetSpec::Fixed {
                    negative: false,
                    hours: 2,
                    minutes: 0,
                },
            ),
            (
                "-0530",
                UtcOffsetSpec::Fixed {
                    negative: true,
                    hours: 5,
                    minutes: 30,
                },
            ),
            (
                "+05:45",
                UtcOffsetSpec::Fixed {
                    negative: false,
                    hours: 5,
                    minutes: 45,
                },
            ),
        ];
        for (suffix, expected) in offsets {
            let parsed = parse_time_value(&format!("2024-01-15T10:30:05{suffix}")).unwrap();
            match parsed {
                TimeValue::DateTime { offset, .. } => assert_eq!(offset, Some(expected)),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn time_of_day_values() {
        assert_eq!(
            parse_time_value("23:59:58"),
            Ok(TimeValue::TimeOfDay {
                hour: 23,
                minute: 59,
                second: 58
            })
        );
    }

    #[test]
    fn rejected_shapes() {
        for bad in [
            "",
            "2024-01-15",
            "2024-01-15 10:30:00",
            "2024-1-15T10:30:00",
            "2024-01-15T10:30:00+5",
            "2024-01-15T10:30:00+05:",
            "2024-01-15T10:30:00UTC",
            "10:30",
            "1:30:00",
            "-100",
            "now",
        ] {
            assert!(parse_time_value(bad).is_err(), "{bad}");
        }
    }
}
