use serde::{Deserialize, Serialize};

use crate::domain::fields::truthy_text;

// ============================================================================
// Event Value Objects
// ============================================================================

/// A stored event. Field order matches the JSON representation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl Event {
    /// Overwrite every field that `changes` carries; returns whether anything changed.
    pub fn apply(&mut self, changes: EventChanges) -> bool {
        let mut touched = false;

        if let Some(name) = changes.name {
            self.name = name;
            touched = true;
        }
        if let Some(date) = changes.date {
            self.date = date;
            touched = true;
        }
        if let Some(location) = changes.location {
            self.location = location;
            touched = true;
        }
        if let Some(description) = changes.description {
            self.description = description;
            touched = true;
        }

        touched
    }
}

/// Payload for creating an event (`POST /events/add`).
#[derive(Deserialize, Clone, Debug, Default)]
pub struct NewEvent {
    #[serde(default, deserialize_with = "truthy_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub description: Option<String>,
}

/// Partial update for an event (`PUT /event/{id}`). `None` leaves the field as is.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct EventChanges {
    #[serde(default, deserialize_with = "truthy_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub description: Option<String>,
}

// ============================================================================
// Unit Tests
// ============================================================================
