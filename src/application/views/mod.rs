//! Role dashboards
//!
//! Each view borrows the shared [`Marketplace`](crate::Marketplace) and only
//! exposes the calls its role may make. Snapshots are plain `Serialize`
//! data for the rendering layer; nothing here keeps its own copy.

mod admin;
mod client;
mod provider;

use serde::Serialize;

use crate::domain::{Provider, Reservation};
use crate::support::money::format_fcfa;

pub use admin::{AdminDashboard, AdminView};
pub use client::{ClientDashboard, ClientView};
pub use provider::{ProviderDashboard, ProviderView};

/// A reservation with its display labels
#[derive(Debug, Clone, Serialize)]
pub struct ReservationRow {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub status_label: &'static str,
    pub price_label: String,
}

impl From<Reservation> for ReservationRow {
    fn from(reservation: Reservation) -> Self {
        Self {
            status_label: reservation.status.label(),
            price_label: format_fcfa(reservation.price),
            reservation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderRow {
    #[serde(flatten)]
    pub provider: Provider,
    pub service_offered: String,
    pub status_label: &'static str,
}

impl From<Provider> for ProviderRow {
    fn from(provider: Provider) -> Self {
        Self {
            service_offered: provider.service_offered().to_string(),
            status_label: provider.status.label(),
            provider,
        }
    }
}

pub(crate) fn rows<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
