use std::collections::BTreeMap;
use tokio::sync::Mutex;

use crate::domain::event::EventStore;

use super::errors::BookingError;
use super::value_objects::{Booking, BookingChanges, NewBooking};

// ============================================================================
// Booking Store - In-memory collection of bookings
// ============================================================================
//
// Same id policy as the event store: a monotonic counter, never reused.
//
// Creation checks that the referenced event exists at that moment and keeps
// only its id. Later changes to the event store (including deleting the event)
// do not touch bookings.
//
// ============================================================================

pub struct BookingStore {
    inner: Mutex<BookingTable>,
}

struct BookingTable {
    bookings: BTreeMap<u64, Booking>,
    next_id: u64,
}

impl BookingTable {
    fn empty() -> Self {
        Self {
            bookings: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, mut booking: Booking) -> Booking {
        booking.id = self.next_id;
        self.next_id += 1;
        self.bookings.insert(booking.id, booking.clone());
        booking
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BookingTable::empty()),
        }
    }

    /// Store holding the startup seed booking (for seed event 1).
    pub fn seeded() -> Self {
        let mut table = BookingTable::empty();
        table.insert(Booking {
            id: 0,
            event_id: 1,
            participant_name: "Nikitha".to_string(),
            email: "nikitha@gmail.com".to_string(),
        });

        Self {
            inner: Mutex::new(table),
        }
    }

    pub async fn list(&self) -> Vec<Booking> {
        self.inner.lock().await.bookings.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.bookings.len()
    }

    /// Create a booking against an event that currently exists.
    pub async fn create(
        &self,
        events: &EventStore,
        new: NewBooking,
    ) -> Result<Booking, BookingError> {
        let (Some(event_ref), Some(participant_name), Some(email)) =
            (new.event_id, new.participant_name, new.email)
        else {
            tracing::debug!("Rejected booking without required fields");
            return Err(BookingError::MissingFields);
        };

        let resolved = match event_ref.id() {
            Some(id) => events.contains(id).await.then_some(id),
            None => None,
        };
        let Some(event_id) = resolved else {
            tracing::debug!(?event_ref, "Rejected booking for unknown event");
            return Err(BookingError::EventNotFound);
        };

        let booking = self.inner.lock().await.insert(Booking {
            id: 0,
            event_id,
            participant_name,
            email,
        });

        tracing::info!(booking_id = booking.id, event_id, "Booking created");
        Ok(booking)
    }

    pub async fn get(&self, id: u64) -> Result<Booking, BookingError> {
        self.inner
            .lock()
            .await
            .bookings
            .get(&id)
            .cloned()
            .ok_or(BookingError::NotFound)
    }

    pub async fn update(&self, id: u64, changes: BookingChanges) -> Result<Booking, BookingError> {
        let mut table = self.inner.lock().await;
        let booking = table.bookings.get_mut(&id).ok_or(BookingError::NotFound)?;

        let touched = booking.apply(changes);
        tracing::info!(booking_id = id, touched, "Booking updated");

        Ok(booking.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<Booking, BookingError> {
        let removed = self
            .inner
            .lock()
            .await
            .bookings
            .remove(&id)
            .ok_or(BookingError::NotFound)?;

        tracing::info!(booking_id = id, event_id = removed.event_id, "Booking cancelled");
        Ok(removed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::EventRef;

    fn new_booking(event_id: u64) -> NewBooking {
        NewBooking {
            event_id: Some(EventRef::Id(event_id)),
            participant_name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_against_existing_event() {
        let events = EventStore::seeded();
        let bookings = BookingStore::seeded();

        let booking = bookings.create(&events, new_booking(1)).await.unwrap();
        assert_eq!(booking.id, 2);
        assert_eq!(booking.event_id, 1);
        assert_eq!(bookings.get(2).await.unwrap(), booking);
    }

    #[tokio::test]
    async fn test_create_unknown_event() {
        let events = EventStore::seeded();
        let bookings = BookingStore::seeded();

        let result = bookings.create(&events, new_booking(999)).await;
        assert_eq!(result, Err(BookingError::EventNotFound));

        let unresolvable = NewBooking {
            event_id: Some(EventRef::Unresolvable),
            ..new_booking(1)
        };
        let result = bookings.create(&events, unresolvable).await;
        assert_eq!(result, Err(BookingError::EventNotFound));
        assert_eq!(bookings.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_fields_checked_before_event_lookup() {
        let events = EventStore::new();
        let bookings = BookingStore::new();

        let result = bookings
            .create(
                &events,
                NewBooking {
                    email: None,
                    ..new_booking(999)
                },
            )
            .await;
        assert_eq!(result, Err(BookingError::MissingFields));
    }

    #[tokio::test]
    async fn test_deleting_event_leaves_bookings() {
        let events = EventStore::seeded();
        let bookings = BookingStore::seeded();

        events.delete(1).await.unwrap();

        let seed = bookings.get(1).await.unwrap();
        assert_eq!(seed.event_id, 1);
        assert_eq!(bookings.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_ids_not_reused() {
        let events = EventStore::seeded();
        let bookings = BookingStore::seeded();

        let second = bookings.create(&events, new_booking(1)).await.unwrap();
        bookings.delete(second.id).await.unwrap();
        let third = bookings.create(&events, new_booking(1)).await.unwrap();

        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_update_keeps_event_link() {
        let bookings = BookingStore::seeded();
        let updated = bookings
            .update(
                1,
                BookingChanges {
                    email: Some("n@example.com".to_string()),
                    participant_name: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "n@example.com");
        assert_eq!(updated.participant_name, "Nikitha");
        assert_eq!(updated.event_id, 1);
    }

    #[tokio::test]
    async fn test_missing_booking() {
        let bookings = BookingStore::seeded();
        assert_eq!(bookings.get(42).await, Err(BookingError::NotFound));
        assert_eq!(bookings.delete(42).await, Err(BookingError::NotFound));
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let events = std::sync::Arc::new(EventStore::seeded());
        let bookings = std::sync::Arc::new(BookingStore::new());

        let mut handles = Vec::new();
        for _ in 0..20 {
            let events = events.clone();
            let bookings = bookings.clone();
            handles.push(tokio::spawn(async move {
                bookings.create(&events, new_booking(1)).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }
}
