use crate::types::CalDateTimeError;

/// A timestamp property carried a value that is not a date-time.
///
/// Raised while building a [`CalendarEvent`](crate::CalendarEvent), the event is unusable.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("invalid value {value:?} for {name}: {source}")]
pub struct FieldCoercionError {
    pub name: String,
    pub value: String,
    #[source]
    pub source: CalDateTimeError,
}

/// The requested property is absent from the event.
///
/// Routine for optional properties like LOCATION or DESCRIPTION.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("VEVENT field not found: {0}")]
pub struct FieldNotFoundError(pub String);

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EventError {
    #[error(transparent)]
    FieldCoercion(#[from] FieldCoercionError),
    #[error(transparent)]
    FieldNotFound(#[from] FieldNotFoundError),
}
