// ============================================================================
// Booking Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Event ID, participant name, and email are required.")]
    MissingFields,

    /// The referenced event did not exist when the booking was attempted.
    #[error("Event not found.")]
    EventNotFound,

    #[error("Booking not found.")]
    NotFound,
}

impl BookingError {
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::MissingFields => "missing_fields",
            BookingError::EventNotFound => "event_not_found",
            BookingError::NotFound => "not_found",
        }
    }
}
