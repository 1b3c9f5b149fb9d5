pub mod component;
pub use component::{Component, ComponentChild, IcalAlarm, IcalEvent};

pub mod parser;
pub use parser::{EventError, EventOptions, FieldCoercionError, FieldNotFoundError};

pub mod property;
pub use property::FieldValue;

pub mod event;
pub use event::CalendarEvent;

pub mod types;
