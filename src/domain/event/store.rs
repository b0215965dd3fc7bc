use std::collections::BTreeMap;
use tokio::sync::Mutex;

use super::errors::EventError;
use super::value_objects::{Event, EventChanges, NewEvent};

// ============================================================================
// Event Store - In-memory collection of events
// ============================================================================
//
// Responsibilities:
// 1. Assign ids from a monotonic counter (ids are never reused)
// 2. Keep events in insertion order
// 3. Serialize every read-modify-write behind a single lock
//
// Ids only ever grow, so ordering the map by id is insertion order.
//
// ============================================================================

pub struct EventStore {
    inner: Mutex<EventTable>,
}

struct EventTable {
    events: BTreeMap<u64, Event>,
    next_id: u64,
}

impl EventTable {
    fn insert(&mut self, mut event: Event) -> Event {
        event.id = self.next_id;
        self.next_id += 1;
        self.events.insert(event.id, event.clone());
        event
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    /// Empty store; the first event gets id 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(EventTable {
                events: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store holding the startup seed event.
    pub fn seeded() -> Self {
        let mut table = EventTable {
            events: BTreeMap::new(),
            next_id: 1,
        };
        table.insert(Event {
            id: 0,
            name: "Synergia 2025".to_string(),
            date: "2025-11-07".to_string(),
            location: "Auditorium".to_string(),
            description: "Opening event for Synergia".to_string(),
        });

        Self {
            inner: Mutex::new(table),
        }
    }

    pub async fn list(&self) -> Vec<Event> {
        self.inner.lock().await.events.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.events.len()
    }

    pub async fn contains(&self, id: u64) -> bool {
        self.inner.lock().await.events.contains_key(&id)
    }

    /// Create an event. `name`, `date` and `location` are required.
    pub async fn create(&self, new: NewEvent) -> Result<Event, EventError> {
        let (Some(name), Some(date), Some(location)) = (new.name, new.date, new.location) else {
            tracing::debug!("Rejected event without required fields");
            return Err(EventError::MissingFields);
        };

        let event = self.inner.lock().await.insert(Event {
            id: 0,
            name,
            date,
            location,
            description: new.description.unwrap_or_default(),
        });

        tracing::info!(event_id = event.id, name = %event.name, "Event created");
        Ok(event)
    }

    pub async fn get(&self, id: u64) -> Result<Event, EventError> {
        self.inner
            .lock()
            .await
            .events
            .get(&id)
            .cloned()
            .ok_or(EventError::NotFound)
    }

    /// Apply a partial update and return the resulting record.
    pub async fn update(&self, id: u64, changes: EventChanges) -> Result<Event, EventError> {
        let mut table = self.inner.lock().await;
        let event = table.events.get_mut(&id).ok_or(EventError::NotFound)?;

        let touched = event.apply(changes);
        tracing::info!(event_id = id, touched, "Event updated");

        Ok(event.clone())
    }

    /// Remove an event and return it. Bookings that reference it are left alone.
    pub async fn delete(&self, id: u64) -> Result<Event, EventError> {
        let removed = self
            .inner
            .lock()
            .await
            .events
            .remove(&id)
            .ok_or(EventError::NotFound)?;

        tracing::info!(event_id = id, "Event cancelled");
        Ok(removed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn new_event(name: &str) -> NewEvent {
        NewEvent {
            name: Some(name.to_string()),
            date: Some("2025-01-01".to_string()),
            location: Some("Hall".to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = EventStore::seeded();
        let events = store.list().await;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].name, "Synergia 2025");
    }

    #[tokio::test]
    async fn test_create_assigns_next_id_and_default_description() {
        let store = EventStore::seeded();
        let event = store.create(new_event("Demo")).await.unwrap();

        assert_eq!(event.id, 2);
        assert_eq!(event.description, "");
        assert_eq!(store.get(2).await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_empty_store_starts_at_one() {
        let store = EventStore::new();
        let event = store.create(new_event("First")).await.unwrap();
        assert_eq!(event.id, 1);
    }

    #[tokio::test]
    async fn test_create_requires_fields() {
        let store = EventStore::seeded();
        let result = store
            .create(NewEvent {
                date: Some("2025-01-01".to_string()),
                ..NewEvent::default()
            })
            .await;

        assert_eq!(result, Err(EventError::MissingFields));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_deleting_last() {
        let store = EventStore::seeded();
        let second = store.create(new_event("Second")).await.unwrap();
        store.delete(second.id).await.unwrap();

        let third = store.create(new_event("Third")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let store = EventStore::new();
        let mut last = 0;
        for i in 0..5 {
            let event = store.create(new_event(&format!("E{i}"))).await.unwrap();
            assert!(event.id > last);
            last = event.id;
        }
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = EventStore::seeded();
        store.create(new_event("A")).await.unwrap();
        store.create(new_event("B")).await.unwrap();

        let names: Vec<_> = store.list().await.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Synergia 2025", "A", "B"]);
    }

    #[tokio::test]
    async fn test_update_with_empty_changes_keeps_record() {
        let store = EventStore::seeded();
        let before = store.get(1).await.unwrap();
        let after = store.update(1, EventChanges::default()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_update_overwrites_present_fields() {
        let store = EventStore::seeded();
        let updated = store
            .update(
                1,
                EventChanges {
                    description: Some("Keynote".to_string()),
                    ..EventChanges::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, "Keynote");
        assert_eq!(updated.name, "Synergia 2025");
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let store = EventStore::seeded();
        assert_eq!(store.get(99).await, Err(EventError::NotFound));
        assert_eq!(
            store.update(99, EventChanges::default()).await,
            Err(EventError::NotFound)
        );
        assert_eq!(store.delete(99).await, Err(EventError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = EventStore::seeded();
        store.delete(1).await.unwrap();
        assert!(!store.contains(1).await);
        assert!(store.list().await.is_empty());
    }
}
