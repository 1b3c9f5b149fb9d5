//! Typed view of a single VEVENT.
//!
//! A [`CalendarEvent`] is built once from a parsed VEVENT and the ETag the CalDAV server
//! reported for it. Every property becomes a field: the timestamp properties
//! (DTSTART, DTEND, CREATED, DTSTAMP, LAST-MODIFIED) are parsed, everything else is kept
//! as the raw text. Nested components such as VALARM are not looked at.
//!
//! # Examples
//!
//! ```rust
//! use caldav_event::{CalendarEvent, component::IcalEvent, parser::ContentLine};
//!
//! let vevent = IcalEvent::from(vec![
//!     ContentLine::new("UID", "offsite-2024@example.com"),
//!     ContentLine::new("SUMMARY", "Offsite"),
//!     ContentLine::new("DTSTART", "20240101"),
//!     ContentLine::new("DTEND", "20240102"),
//! ]);
//!
//! let event = CalendarEvent::new(&vevent, "\"abc123\"").unwrap();
//! assert_eq!(event.get_summary(), Ok("Offsite"));
//! assert!(event.is_all_day());
//! assert!(event.get_location().is_err());
//! ```

use std::collections::HashMap;

use crate::{
    component::Component,
    parser::{EventOptions, FieldCoercionError, FieldNotFoundError},
    property::{
        CREATED, Coercion, DESCRIPTION, DTEND, DTSTAMP, DTSTART, FieldValue, LAST_MODIFIED,
        LOCATION, SUMMARY, UID,
    },
    types::CalDateTime,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    etag: String,
    fields: HashMap<String, FieldValue>,
    all_day: bool,
}

impl CalendarEvent {
    pub fn new<C: Component>(
        event: &C,
        etag: impl Into<String>,
    ) -> Result<Self, FieldCoercionError> {
        Self::with_options(event, etag, &EventOptions::default())
    }

    pub fn with_options<C: Component>(
        event: &C,
        etag: impl Into<String>,
        options: &EventOptions,
    ) -> Result<Self, FieldCoercionError> {
        let fields = parse_fields(event, options)?;
        let mut out = Self {
            etag: etag.into(),
            fields,
            all_day: false,
        };
        // Decided once, the fields never change afterwards
        out.all_day = out.infer_all_day();
        tracing::trace!(etag = %out.etag, all_day = out.all_day, "built calendar event");
        Ok(out)
    }

    /// Both DTSTART and DTEND exist and sit on midnight.
    ///
    /// A date-only value is midnight as well, so whole-day events qualify whether they were
    /// written as DATE or as DATE-TIME.
    fn infer_all_day(&self) -> bool {
        self.get_start()
            .and_then(|start| Ok((start, self.get_end()?)))
            .is_ok_and(|(start, end)| start.is_midnight() && end.is_midnight())
    }

    #[inline]
    pub fn get_etag(&self) -> &str {
        &self.etag
    }

    pub fn get_field(&self, name: &str) -> Result<&FieldValue, FieldNotFoundError> {
        self.fields
            .get(name)
            .ok_or_else(|| FieldNotFoundError(name.to_owned()))
    }

    #[inline]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All fields in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn get_text(&self, name: &str) -> Result<&str, FieldNotFoundError> {
        self.get_field(name)?
            .as_text()
            .ok_or_else(|| FieldNotFoundError(name.to_owned()))
    }

    fn get_timestamp(&self, name: &str) -> Result<&CalDateTime, FieldNotFoundError> {
        self.get_field(name)?
            .as_timestamp()
            .ok_or_else(|| FieldNotFoundError(name.to_owned()))
    }

    pub fn get_location(&self) -> Result<&str, FieldNotFoundError> {
        self.get_text(LOCATION)
    }

    pub fn get_summary(&self) -> Result<&str, FieldNotFoundError> {
        self.get_text(SUMMARY)
    }

    pub fn get_description(&self) -> Result<&str, FieldNotFoundError> {
        self.get_text(DESCRIPTION)
    }

    pub fn get_uid(&self) -> Result<&str, FieldNotFoundError> {
        self.get_text(UID)
    }

    pub fn get_start(&self) -> Result<&CalDateTime, FieldNotFoundError> {
        self.get_timestamp(DTSTART)
    }

    pub fn get_end(&self) -> Result<&CalDateTime, FieldNotFoundError> {
        self.get_timestamp(DTEND)
    }

    pub fn get_created(&self) -> Result<&CalDateTime, FieldNotFoundError> {
        self.get_timestamp(CREATED)
    }

    pub fn get_dtstamp(&self) -> Result<&CalDateTime, FieldNotFoundError> {
        self.get_timestamp(DTSTAMP)
    }

    pub fn get_last_modified(&self) -> Result<&CalDateTime, FieldNotFoundError> {
        self.get_timestamp(LAST_MODIFIED)
    }

    #[inline]
    pub fn is_all_day(&self) -> bool {
        self.all_day
    }
}

fn parse_fields<C: Component>(
    event: &C,
    options: &EventOptions,
) -> Result<HashMap<String, FieldValue>, FieldCoercionError> {
    let mut fields = HashMap::new();
    for prop in event.get_properties() {
        let value = Coercion::for_name(&prop.name).apply(prop, options)?;
        // Repeated properties (ATTENDEE, CATEGORIES, ...) collapse to the last one
        if fields.insert(prop.name.to_owned(), value).is_some() {
            tracing::debug!(name = %prop.name, "property repeated, keeping last value");
        }
    }
    Ok(fields)
}
