use std::str::FromStr;

use crate::{
    parser::{ContentLine, EventOptions, FieldCoercionError},
    types::{CalDateTime, Tz},
};

/// Typed interpretation of a property value.
pub trait ParseProp: Sized {
    fn parse_prop(prop: &ContentLine, options: &EventOptions) -> Result<Self, FieldCoercionError>;
}

impl ParseProp for String {
    fn parse_prop(prop: &ContentLine, _options: &EventOptions) -> Result<Self, FieldCoercionError> {
        Ok(prop.raw_value().to_owned())
    }
}

impl ParseProp for CalDateTime {
    fn parse_prop(prop: &ContentLine, options: &EventOptions) -> Result<Self, FieldCoercionError> {
        let timezone = if options.resolve_tzid {
            prop.params.get_tzid().and_then(resolve_tzid)
        } else {
            None
        };
        Self::parse(prop.raw_value(), timezone).map_err(|source| FieldCoercionError {
            name: prop.name.to_owned(),
            value: prop.raw_value().to_owned(),
            source,
        })
    }
}

/// Look up a TZID parameter in the IANA database.
///
/// Unknown identifiers leave the value floating.
pub fn resolve_tzid(tzid: &str) -> Option<Tz> {
    // RFC 5545 globally unique identifiers carry a leading solidus
    let name = tzid.strip_prefix('/').unwrap_or(tzid);
    match chrono_tz::Tz::from_str(name) {
        Ok(tz) => Some(Tz::Olson(tz)),
        Err(_) => {
            tracing::debug!(tzid, "unknown TZID, reading value as floating time");
            None
        }
    }
}
