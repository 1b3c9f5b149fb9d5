use derive_more::{Display, From};

use crate::{
    parser::{ContentLine, EventOptions, FieldCoercionError, ParseProp},
    types::CalDateTime,
};

pub const DTSTART: &str = "DTSTART";
pub const DTEND: &str = "DTEND";
pub const CREATED: &str = "CREATED";
pub const DTSTAMP: &str = "DTSTAMP";
pub const LAST_MODIFIED: &str = "LAST-MODIFIED";
pub const UID: &str = "UID";
pub const SUMMARY: &str = "SUMMARY";
pub const LOCATION: &str = "LOCATION";
pub const DESCRIPTION: &str = "DESCRIPTION";

/// How a property value is stored on a [`CalendarEvent`](crate::CalendarEvent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Text,
    Timestamp,
}

static COERCIONS: phf::Map<&'static str, Coercion> = phf::phf_map! {
    "DTSTART" => Coercion::Timestamp,
    "DTEND" => Coercion::Timestamp,
    "CREATED" => Coercion::Timestamp,
    "DTSTAMP" => Coercion::Timestamp,
    "LAST-MODIFIED" => Coercion::Timestamp,
};

impl Coercion {
    /// Strategy for a property name, matched case-sensitively.
    #[inline]
    pub fn for_name(name: &str) -> Self {
        COERCIONS.get(name).copied().unwrap_or(Self::Text)
    }

    pub fn apply(
        self,
        prop: &ContentLine,
        options: &EventOptions,
    ) -> Result<FieldValue, FieldCoercionError> {
        Ok(match self {
            Self::Text => FieldValue::Text(ParseProp::parse_prop(prop, options)?),
            Self::Timestamp => FieldValue::Timestamp(ParseProp::parse_prop(prop, options)?),
        })
    }
}

/// A property value after coercion.
#[derive(Debug, Clone, PartialEq, Eq, From, Display)]
pub enum FieldValue {
    Text(String),
    Timestamp(CalDateTime),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Timestamp(_) => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&CalDateTime> {
        match self {
            Self::Timestamp(dt) => Some(dt),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
