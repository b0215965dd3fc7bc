// ============================================================================
// Event Domain - Schedulable occurrences that bookings point at
// ============================================================================
//
// - Value objects (Event, NewEvent, EventChanges)
// - Errors (EventError enum)
// - Store (EventStore, the in-memory collection)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod store;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use store::*;
