//! In-memory VEVENT and VALARM components.
//!
//! A grammar parser fills these with the content lines it read, in order,
//! and nests VALARM components where they occurred.
//!
//! # Examples
//!
//! ```rust
//! use caldav_event::{
//!     component::{Component, IcalAlarm, IcalEvent},
//!     parser::ContentLine,
//! };
//!
//! let mut event = IcalEvent::new();
//! event.add_content_line(ContentLine::new("UID", "1234@example.com"));
//! event.add_sub_component(IcalAlarm::from(vec![ContentLine::new("ACTION", "DISPLAY")]));
//! event.add_content_line(ContentLine::new("SUMMARY", "Offsite"));
//!
//! assert_eq!(event.get_properties().count(), 2);
//! assert_eq!(event.get_alarms().count(), 1);
//! ```

mod alarm;
pub use alarm::IcalAlarm;
mod event;
pub use event::{IcalEvent, IcalEventChild};
