use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::fields::{is_truthy, truthy_text};

// ============================================================================
// Booking Value Objects
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub event_id: u64,
    pub participant_name: String,
    pub email: String,
}

impl Booking {
    pub fn apply(&mut self, changes: BookingChanges) -> bool {
        let mut touched = false;

        if let Some(participant_name) = changes.participant_name {
            self.participant_name = participant_name;
            touched = true;
        }
        if let Some(email) = changes.email {
            self.email = email;
            touched = true;
        }

        touched
    }
}

/// The `eventId` a client supplied, once it is known to be set.
///
/// Only non-negative integers can name an event. Anything else (a string such
/// as `"1"`, a fraction) is kept as `Unresolvable` so that it fails the lookup
/// rather than the presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRef {
    Id(u64),
    Unresolvable,
}

impl EventRef {
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_truthy(value) {
            return None;
        }

        let id = value.as_u64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f < u64::MAX as f64)
                .map(|f| f as u64)
        });

        Some(id.map_or(EventRef::Unresolvable, EventRef::Id))
    }

    pub fn id(self) -> Option<u64> {
        match self {
            EventRef::Id(id) => Some(id),
            EventRef::Unresolvable => None,
        }
    }
}

fn truthy_event_ref<'de, D>(deserializer: D) -> Result<Option<EventRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(EventRef::from_value(&value))
}

/// Payload for `POST /api/bookings`.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(default, deserialize_with = "truthy_event_ref")]
    pub event_id: Option<EventRef>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub participant_name: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub email: Option<String>,
}

/// Partial update for `PUT /api/bookings/{id}`. The event link cannot be changed.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingChanges {
    #[serde(default, deserialize_with = "truthy_text")]
    pub participant_name: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub email: Option<String>,
}

// ============================================================================
// Unit Tests
// ============================================================================
