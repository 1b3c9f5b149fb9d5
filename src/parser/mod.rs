mod error;
pub use error::{EventError, FieldCoercionError, FieldNotFoundError};

mod content_line;
pub use content_line::{ContentLine, ContentLineParams};

mod property;
pub use property::{ParseProp, resolve_tzid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOptions {
    /// Read timestamps carrying a TZID parameter in that IANA timezone.
    /// When false, or when the TZID is unknown, such timestamps stay floating.
    pub resolve_tzid: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { resolve_tzid: true }
    }
}
