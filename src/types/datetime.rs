use super::Tz;
use chrono::{
    DateTime, FixedOffset, MappedLocalTime, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Timelike,
};
use derive_more::{Deref, Display};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::str::FromStr;

lazy_static! {
    // Both the basic (20240101T090000Z) and the extended (2024-01-01T09:00:00+02:00) forms.
    static ref RE_DATETIME: Regex = Regex::new(
        r"^(?<year>[0-9]{4})(?:-(?<month_ext>[0-9]{2})-(?<day_ext>[0-9]{2})|(?<month>[0-9]{2})(?<day>[0-9]{2}))(?:[T ](?<hour>[0-9]{2})(?::?(?<minute>[0-9]{2})(?::?(?<second>[0-9]{2})(?:[.,](?<fraction>[0-9]{1,9}))?)?)?)?(?<zone>Z|[+-][0-9]{2}(?::?[0-9]{2})?)?$"
    )
    .expect("static regex is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalDateTimeError {
    #[error("Invalid datetime format: {0}")]
    InvalidFormat(String),
    #[error("Datetime out of range: {0}")]
    OutOfRange(String),
}

/// A timestamp taken from a date or date-time property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref, Display)]
#[display("{_0}")]
pub struct CalDateTime(#[deref] DateTime<Tz>, bool);

impl CalDateTime {
    /// Parse a raw property value.
    ///
    /// A `Z` suffix or a numeric offset in the value wins over `default_tz`.
    /// Without either, the value is read in `default_tz` or, if that is `None`, as floating time.
    pub fn parse(value: &str, default_tz: Option<Tz>) -> Result<Self, CalDateTimeError> {
        let captures = RE_DATETIME
            .captures(value.trim())
            .ok_or_else(|| CalDateTimeError::InvalidFormat(value.to_owned()))?;

        let date = parse_date(&captures, value)?;
        let is_date = captures.name("hour").is_none();
        let time = if is_date {
            NaiveTime::MIN
        } else {
            parse_time(&captures, value)?
        };
        let naive = NaiveDateTime::new(date, time);

        let timezone = match captures.name("zone").map(|zone| zone.as_str()) {
            Some("Z") => Tz::UTC,
            Some(offset) => Tz::Fixed(parse_offset(offset, value)?),
            None => default_tz.unwrap_or(Tz::Local),
        };

        if is_date {
            return Ok(Self::from_date(date, timezone));
        }
        Ok(Self(resolve_local(timezone, &naive), false))
    }

    /// Midnight of `date` in `timezone`.
    pub fn from_date(date: NaiveDate, timezone: Tz) -> Self {
        Self(resolve_local(timezone, &date.and_time(NaiveTime::MIN)), true)
    }

    /// Whether the source value was a DATE rather than a DATE-TIME.
    #[inline]
    pub fn is_date(&self) -> bool {
        self.1
    }

    /// Wall-clock time-of-day is 00:00:00, whatever the zone.
    #[inline]
    pub fn is_midnight(&self) -> bool {
        self.0.num_seconds_from_midnight() == 0
    }

    #[inline]
    pub fn timezone(&self) -> Tz {
        self.0.timezone()
    }

    #[inline]
    pub fn naive_local(&self) -> NaiveDateTime {
        self.0.naive_local()
    }

}

impl From<DateTime<Tz>> for CalDateTime {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value, false)
    }
}

impl FromStr for CalDateTime {
    type Err = CalDateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

/// Bind a wall-clock time to `timezone`, the wall clock always stays as written.
///
/// Repeated times take the earlier instant. Times skipped by a transition are read with
/// the offset in force before it (RFC 5545 3.3.5).
fn resolve_local(timezone: Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match timezone.from_local_datetime(naive) {
        MappedLocalTime::Single(dt) => dt,
        MappedLocalTime::Ambiguous(earliest, _) => earliest,
        MappedLocalTime::None => {
            let before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .unwrap_or(*naive);
            let offset = timezone.offset_from_utc_datetime(&before).fix();
            Tz::Fixed(offset).from_utc_datetime(&(*naive - offset))
        }
    }
}

fn capture_u32(captures: &Captures, names: &[&str]) -> Option<u32> {
    names
        .iter()
        .find_map(|name| captures.name(name))
        .and_then(|m| m.as_str().parse().ok())
}

fn parse_date(captures: &Captures, value: &str) -> Result<NaiveDate, CalDateTimeError> {
    let invalid = || CalDateTimeError::InvalidFormat(value.to_owned());
    let year = captures
        .name("year")
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .ok_or_else(invalid)?;
    let month = capture_u32(captures, &["month", "month_ext"]).ok_or_else(invalid)?;
    let day = capture_u32(captures, &["day", "day_ext"]).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CalDateTimeError::OutOfRange(value.to_owned()))
}

fn parse_time(captures: &Captures, value: &str) -> Result<NaiveTime, CalDateTimeError> {
    let hour = capture_u32(captures, &["hour"])
        .ok_or_else(|| CalDateTimeError::InvalidFormat(value.to_owned()))?;
    let minute = capture_u32(captures, &["minute"]).unwrap_or(0);
    let second = capture_u32(captures, &["second"]).unwrap_or(0);
    let nano = match captures.name("fraction") {
        // Right-pad to nanoseconds: ".5" is 500_000_000
        Some(fraction) => format!("{:0<9}", fraction.as_str())
            .parse()
            .map_err(|_| CalDateTimeError::InvalidFormat(value.to_owned()))?,
        None => 0,
    };
    NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
        .ok_or_else(|| CalDateTimeError::OutOfRange(value.to_owned()))
}

fn parse_offset(offset: &str, value: &str) -> Result<FixedOffset, CalDateTimeError> {
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let digits = offset[1..].replace(':', "");
    let (hours, minutes) = digits.split_at(2.min(digits.len()));
    let hours: i32 = hours
        .parse()
        .map_err(|_| CalDateTimeError::InvalidFormat(value.to_owned()))?;
    let minutes: i32 = if minutes.is_empty() {
        0
    } else {
        minutes
            .parse()
            .map_err(|_| CalDateTimeError::InvalidFormat(value.to_owned()))?
    };
    if minutes >= 60 {
        return Err(CalDateTimeError::OutOfRange(value.to_owned()));
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| CalDateTimeError::OutOfRange(value.to_owned()))
}
