use serde::Serialize;

use super::{rows, ReservationRow};
use crate::domain::{CatalogEntry, Client, DomainResult, Reservation};
use crate::Marketplace;

/// Client dashboard: the catalog plus the client's own bookings
pub struct ClientView<'a> {
    market: &'a Marketplace,
    client_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientDashboard {
    pub client: Client,
    pub catalog: Vec<CatalogEntry>,
    /// Newest first
    pub reservations: Vec<ReservationRow>,
}

impl<'a> ClientView<'a> {
    pub(crate) fn new(market: &'a Marketplace, client_id: impl Into<String>) -> Self {
        Self {
            market,
            client_id: client_id.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn reserve(&self, service_id: &str) -> DomainResult<Reservation> {
        self.market.reservations().create(service_id, &self.client_id)
    }

    pub fn reservations(&self) -> DomainResult<Vec<Reservation>> {
        self.market.reservations().list_for_client(&self.client_id)
    }

    pub fn snapshot(&self) -> DomainResult<ClientDashboard> {
        Ok(ClientDashboard {
            client: self.market.client(&self.client_id)?,
            catalog: self.market.catalog()?,
            reservations: rows(self.reservations()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::domain::{DomainError, ReservationStatus};
    use crate::Marketplace;

    #[test]
    fn reserve_shows_up_first_in_own_feed() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let view = market.client_view("client-2");

        let before = view.reservations().unwrap().len();
        let r = view.reserve("informatique").unwrap();

        let feed = view.snapshot().unwrap().reservations;
        assert_eq!(feed.len(), before + 1);
        assert_eq!(feed[0].reservation.id, r.id);
        assert_eq!(feed[0].status_label, ReservationStatus::Pending.label());
        assert_eq!(feed[0].price_label, "35 000 FCFA");
        assert!(feed.iter().all(|row| row.reservation.client_id == "client-2"));
    }

    #[test]
    fn unknown_client_cannot_reserve() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let view = market.client_view("client-404");
        assert!(matches!(
            view.reserve("electricite"),
            Err(DomainError::NotFound { entity: "Client", .. })
        ));
        assert!(view.snapshot().is_err());
    }
}
