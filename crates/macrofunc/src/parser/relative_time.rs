//! Relative time expressions such as `now-1d/d` or `now+2h30m`.
//!
//! Grammar:
//!
//! ```text
//! expression := "now" token*
//! token      := offset | rounding
//! offset     := ("+" | "-") digits unit?
//! rounding   := "/" ("m" | "h" | "d" | "w" | "M" | "y")
//! unit       := "s" | "m" | "h" | "d" | "w" | "M" | "y"
//! ```
//!
//! An offset without a unit counts seconds. Tokens are applied left to right.

use chrono::{
    DateTime, Datelike, Months, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
};
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::one_of;

use super::ParseError;
use super::parse_complete;

/// Calendar and clock units used by relative time tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// One step of a relative time expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeToken {
    /// Move the time by a signed amount of a unit.
    Offset { amount: i64, unit: TimeUnit },
    /// Truncate the time to the start of the unit's period.
    Round(TimeUnit),
}

/// A parsed relative time expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTime {
    pub tokens: Vec<RelativeToken>,
}

/// Parse a complete relative time expression, including the `now` prefix.
pub fn parse_relative_time(input: &str) -> Result<RelativeTime, ParseError> {
    parse_complete(input, expression)
}

fn expression(input: &mut &str) -> ModalResult<RelativeTime> {
    preceded("now", repeat(0.., alt((offset, rounding))))
        .map(|tokens| RelativeTime { tokens })
        .parse_next(input)
}

fn offset(input: &mut &str) -> ModalResult<RelativeToken> {
    (
        one_of(['+', '-']),
        digit1.try_map(str::parse::<i64>),
        opt(unit),
    )
        .map(|(sign, magnitude, unit)| RelativeToken::Offset {
            amount: if sign == '-' { -magnitude } else { magnitude },
            unit: unit.unwrap_or(TimeUnit::Second),
        })
        .parse_next(input)
}

fn rounding(input: &mut &str) -> ModalResult<RelativeToken> {
    preceded(
        '/',
        alt((
            'm'.value(TimeUnit::Minute),
            'h'.value(TimeUnit::Hour),
            'd'.value(TimeUnit::Day),
            'w'.value(TimeUnit::Week),
            'M'.value(TimeUnit::Month),
            'y'.value(TimeUnit::Year),
        )),
    )
    .map(RelativeToken::Round)
    .parse_next(input)
}

fn unit(input: &mut &str) -> ModalResult<TimeUnit> {
    alt((
        's'.value(TimeUnit::Second),
        'm'.value(TimeUnit::Minute),
        'h'.value(TimeUnit::Hour),
        'd'.value(TimeUnit::Day),
        'w'.value(TimeUnit::Week),
        'M'.value(TimeUnit::Month),
        'y'.value(TimeUnit::Year),
    ))
    .parse_next(input)
}

impl RelativeTime {
    /// Apply every token to `base`, in order.
    ///
    /// Returns `None` if an intermediate time cannot be represented.
    pub fn resolve<Tz: TimeZone>(&self, base: DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.tokens
            .iter()
            .try_fold(base, |time, token| token.apply(time))
    }
}

impl RelativeToken {
    fn apply<Tz: TimeZone>(self, time: DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            RelativeToken::Offset { amount, unit } => match unit {
                TimeUnit::Second => time.checked_add_signed(TimeDelta::try_seconds(amount)?),
                TimeUnit::Minute => time.checked_add_signed(TimeDelta::try_minutes(amount)?),
                TimeUnit::Hour => time.checked_add_signed(TimeDelta::try_hours(amount)?),
                TimeUnit::Day => {
                    let delta = TimeDelta::try_days(amount)?;
                    shift_local(time, |local| local.checked_add_signed(delta))
                }
                TimeUnit::Week => {
                    let delta = TimeDelta::try_weeks(amount)?;
                    shift_local(time, |local| local.checked_add_signed(delta))
                }
                TimeUnit::Month => shift_local(time, |local| add_months(local, amount)),
                TimeUnit::Year => {
                    let months = amount.checked_mul(12)?;
                    shift_local(time, |local| add_months(local, months))
                }
            },
            RelativeToken::Round(unit) => shift_local(time, |local| start_of(local, unit)),
        }
    }
}

/// Rewrite the wall-clock reading of `time` and map it back into its zone.
fn shift_local<Tz: TimeZone>(
    time: DateTime<Tz>,
    shift: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>,
) -> Option<DateTime<Tz>> {
    let shifted = shift(time.naive_local())?;
    localize(&time.timezone(), shifted)
}

/// Interpret a wall-clock reading in `tz`.
///
/// Ambiguous readings pick the earlier instant; readings that fall into a
/// gap move forward by an hour.
pub(crate) fn localize<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&local).earliest().or_else(|| {
        let forward = local.checked_add_signed(TimeDelta::try_hours(1)?)?;
        tz.from_local_datetime(&forward).earliest()
    })
}

fn add_months(local: NaiveDateTime, amount: i64) -> Option<NaiveDateTime> {
    let months = Months::new(u32::try_from(amount.unsigned_abs()).ok()?);
    if amount < 0 {
        local.checked_sub_months(months)
    } else {
        local.checked_add_months(months)
    }
}

fn start_of(local: NaiveDateTime, unit: TimeUnit) -> Option<NaiveDateTime> {
    let date = local.date();
    match unit {
        TimeUnit::Second => local.with_nanosecond(0),
        TimeUnit::Minute => local.with_second(0)?.with_nanosecond(0),
        TimeUnit::Hour => local.with_minute(0)?.with_second(0)?.with_nanosecond(0),
        TimeUnit::Day => Some(date.and_time(NaiveTime::MIN)),
        TimeUnit::Week => {
            let back = TimeDelta::try_days(i64::from(date.weekday().num_days_from_monday()))?;
            Some(date.checked_sub_signed(back)?.and_time(NaiveTime::MIN))
        }
        TimeUnit::Month => Some(date.with_day(1)?.and_time(NaiveTime::MIN)),
        TimeUnit::Year => Some(date.with_ordinal(1)?.and_time(NaiveTime::MIN)),
    }
}
