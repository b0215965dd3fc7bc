// ============================================================================
// Domain Layer - Events and Bookings
// ============================================================================
//
// Each resource has its own subdirectory with:
// - Value objects (the record plus its create/update payloads)
// - Errors
// - Store (in-memory collection with CRUD operations)
//
// The stores know nothing about HTTP. The api module translates between
// requests and store calls.
//
// ============================================================================

pub mod fields;
pub mod event;
pub mod booking;
