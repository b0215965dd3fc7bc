// ============================================================================
// Booking Domain - A participant's reservation against one event
// ============================================================================
//
// - Value objects (Booking, NewBooking, BookingChanges, EventRef)
// - Errors (BookingError enum)
// - Store (BookingStore, checks events on create)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod store;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use store::*;
