//! Reservation domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;
use crate::support::errors::DomainError;

/// Reservation status
///
/// `Pending` is the only initial state. `Refused` and `Completed` are
/// terminal; nothing ever returns to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Waiting for the provider's answer
    Pending,
    /// Provider agreed to do the job
    Accepted,
    /// Provider (or admin) declined
    Refused,
    /// Job done
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Refused => "refused",
            Self::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "refused" => Some(Self::Refused),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Dashboard badge text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Acceptée",
            Self::Refused => "Refusée",
            Self::Completed => "Terminée",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Refused | Self::Completed)
    }

    /// Whether the state machine has an edge `self -> next`.
    pub fn can_become(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Refused)
                | (Self::Accepted, Self::Completed)
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client's request for a provider to perform a catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Opaque unique ID (`res-<uuid>`)
    pub id: String,
    pub service_id: String,
    pub service_name: String,
    pub client_id: String,
    pub client_name: String,
    pub provider_id: String,
    pub provider_name: String,
    /// Current status
    pub status: ReservationStatus,
    /// When the reservation was created
    pub date: DateTime<Utc>,
    /// FCFA, fixed at creation time
    pub price: u64,
    /// Insertion order within the store
    pub sequence: u64,
}

impl Reservation {
    pub fn new_id() -> String {
        format!("res-{}", uuid::Uuid::new_v4())
    }

    pub fn accept(&mut self) -> DomainResult<()> {
        self.transition(ReservationStatus::Accepted, "accept")
    }

    pub fn refuse(&mut self) -> DomainResult<()> {
        self.transition(ReservationStatus::Refused, "refuse")
    }

    pub fn complete(&mut self) -> DomainResult<()> {
        self.transition(ReservationStatus::Completed, "complete")
    }

    pub fn is_pending(&self) -> bool {
        self.status == ReservationStatus::Pending
    }

    fn transition(&mut self, next: ReservationStatus, action: &'static str) -> DomainResult<()> {
        if !self.status.can_become(next) {
            return Err(DomainError::InvalidTransition {
                entity: "Reservation",
                id: self.id.clone(),
                from: self.status.as_str(),
                action,
            });
        }
        self.status = next;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
