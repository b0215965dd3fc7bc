// ============================================================================
// Event Errors
// ============================================================================
//
// The Display text doubles as the client-facing `message`.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("Name, date, and location are required.")]
    MissingFields,

    #[error("Event not found.")]
    NotFound,
}

impl EventError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            EventError::MissingFields => "missing_fields",
            EventError::NotFound => "not_found",
        }
    }
}
