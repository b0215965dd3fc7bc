use chrono::{DateTime, Utc};

use crate::domain::booking::BookingStore;
use crate::domain::event::EventStore;
use crate::metrics::Metrics;

pub const EVENTS: &str = "events";
pub const BOOKINGS: &str = "bookings";

// ============================================================================
// Application State - shared by every worker through web::Data
// ============================================================================

pub struct AppState {
    pub events: EventStore,
    pub bookings: BookingStore,
    pub metrics: Metrics,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(events: EventStore, bookings: BookingStore, metrics: Metrics) -> Self {
        Self {
            events,
            bookings,
            metrics,
            started_at: Utc::now(),
        }
    }

    /// State as it is at process start: one seed event and one seed booking.
    pub fn seeded(metrics: Metrics) -> Self {
        Self::new(EventStore::seeded(), BookingStore::seeded(), metrics)
    }

    /// Count a store call; `failure` is the error kind when the call failed.
    pub fn record(&self, store: &str, operation: &str, failure: Option<&str>) {
        self.metrics
            .record_store_operation(store, operation, failure.unwrap_or("ok"));
    }

    pub async fn refresh_record_gauges(&self) {
        self.metrics.set_store_records(EVENTS, self.events.len().await);
        self.metrics.set_store_records(BOOKINGS, self.bookings.len().await);
    }
}
