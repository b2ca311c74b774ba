//! Notification events
//!
//! One event per successful mutation. The rendering layer listens and
//! re-reads the affected projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ProviderStatus, ReservationStatus};

/// Event types for notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// A client booked a service
    ReservationCreated(ReservationCreatedEvent),
    /// Accept, refuse or complete
    ReservationStatusChanged(ReservationStatusChangedEvent),
    /// Admin removed a reservation
    ReservationDeleted(ReservationDeletedEvent),
    /// New client admitted
    ClientRegistered(ClientRegisteredEvent),
    /// New provider waiting for approval
    ProviderRegistered(ProviderRegisteredEvent),
    /// Approve, suspend or reinstate
    ProviderStatusChanged(ProviderStatusChangedEvent),
}

impl Event {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::ReservationCreated(_) => "reservation_created",
            Event::ReservationStatusChanged(_) => "reservation_status_changed",
            Event::ReservationDeleted(_) => "reservation_deleted",
            Event::ClientRegistered(_) => "client_registered",
            Event::ProviderRegistered(_) => "provider_registered",
            Event::ProviderStatusChanged(_) => "provider_status_changed",
        }
    }

    /// Reservation ID if applicable
    pub fn reservation_id(&self) -> Option<&str> {
        match self {
            Event::ReservationCreated(e) => Some(&e.reservation_id),
            Event::ReservationStatusChanged(e) => Some(&e.reservation_id),
            Event::ReservationDeleted(e) => Some(&e.reservation_id),
            _ => None,
        }
    }

    /// Provider ID if applicable
    pub fn provider_id(&self) -> Option<&str> {
        match self {
            Event::ReservationCreated(e) => Some(&e.provider_id),
            Event::ReservationStatusChanged(e) => Some(&e.provider_id),
            Event::ProviderRegistered(e) => Some(&e.provider_id),
            Event::ProviderStatusChanged(e) => Some(&e.provider_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationCreatedEvent {
    pub reservation_id: String,
    pub client_id: String,
    pub provider_id: String,
    pub service_id: String,
    pub price: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationStatusChangedEvent {
    pub reservation_id: String,
    pub client_id: String,
    pub provider_id: String,
    pub from: ReservationStatus,
    pub to: ReservationStatus,
    /// `role` or `role:id` of whoever triggered it
    pub actor: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDeletedEvent {
    pub reservation_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRegisteredEvent {
    pub client_id: String,
    pub city: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRegisteredEvent {
    pub provider_id: String,
    pub name: String,
    pub services: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderStatusChangedEvent {
    pub provider_id: String,
    pub from: ProviderStatus,
    pub to: ProviderStatus,
    pub timestamp: DateTime<Utc>,
}

/// Event with a unique message ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub id: String,
    #[serde(flatten)]
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            event,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
