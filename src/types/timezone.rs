use chrono::{FixedOffset, MappedLocalTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use derive_more::{Display, From};

/// Timezone a timestamp was written in.
///
/// `Local` is the floating time of RFC 5545: a wall-clock time not bound to any zone.
#[derive(Debug, Clone, Copy, From, PartialEq, Eq)]
pub enum Tz {
    Local,
    Fixed(FixedOffset),
    Olson(chrono_tz::Tz),
}

impl Tz {
    pub const UTC: Self = Self::Olson(chrono_tz::UTC);

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn is_utc(&self) -> bool {
        matches!(self, Self::Olson(chrono_tz::UTC))
    }

    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Local => "Local".to_owned(),
            Self::Fixed(offset) => offset.to_string(),
            Self::Olson(tz) => tz.name().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CalTimezoneOffset {
    Local,
    Fixed(FixedOffset),
    Olson(chrono_tz::TzOffset),
}

impl chrono::Offset for CalTimezoneOffset {
    fn fix(&self) -> FixedOffset {
        match self {
            Self::Local => Utc.fix(),
            Self::Fixed(offset) => *offset,
            Self::Olson(olson) => olson.fix(),
        }
    }
}

impl TimeZone for Tz {
    type Offset = CalTimezoneOffset;

    fn from_offset(offset: &Self::Offset) -> Self {
        match offset {
            CalTimezoneOffset::Local => Self::Local,
            CalTimezoneOffset::Fixed(offset) => Self::Fixed(*offset),
            CalTimezoneOffset::Olson(offset) => Self::Olson(chrono_tz::Tz::from_offset(offset)),
        }
    }

    #[cfg(not(tarpaulin_include))] // Only used by deprecated chrono::Date type
    fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<Self::Offset> {
        match self {
            Self::Local => MappedLocalTime::Single(CalTimezoneOffset::Local),
            Self::Fixed(offset) => MappedLocalTime::Single(CalTimezoneOffset::Fixed(*offset)),
            Self::Olson(tz) => tz
                .offset_from_local_date(local)
                .map(CalTimezoneOffset::Olson),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<Self::Offset> {
        match self {
            Self::Local => MappedLocalTime::Single(CalTimezoneOffset::Local),
            Self::Fixed(offset) => MappedLocalTime::Single(CalTimezoneOffset::Fixed(*offset)),
            Self::Olson(tz) => tz
                .offset_from_local_datetime(local)
                .map(CalTimezoneOffset::Olson),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> Self::Offset {
        match self {
            Self::Local => CalTimezoneOffset::Local,
            Self::Fixed(offset) => CalTimezoneOffset::Fixed(*offset),
            Self::Olson(tz) => CalTimezoneOffset::Olson(tz.offset_from_utc_datetime(utc)),
        }
    }

    #[cfg(not(tarpaulin_include))] // Only used by deprecated chrono::Date type
    fn offset_from_utc_date(&self, utc: &NaiveDate) -> Self::Offset {
        match self {
            Self::Local => CalTimezoneOffset::Local,
            Self::Fixed(offset) => CalTimezoneOffset::Fixed(*offset),
            Self::Olson(tz) => CalTimezoneOffset::Olson(tz.offset_from_utc_date(utc)),
        }
    }
}
