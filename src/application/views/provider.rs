use serde::Serialize;

use super::{rows, ReservationRow};
use crate::application::services::ProviderStats;
use crate::domain::{Actor, DomainResult, Provider, Reservation};
use crate::Marketplace;

/// Provider dashboard: requests addressed to one provider
pub struct ProviderView<'a> {
    market: &'a Marketplace,
    actor: Actor,
    provider_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderDashboard {
    pub provider: Provider,
    pub stats: ProviderStats,
    /// Still waiting for an answer, oldest first
    pub pending: Vec<ReservationRow>,
    /// Everything already answered
    pub history: Vec<ReservationRow>,
}

impl<'a> ProviderView<'a> {
    pub(crate) fn new(market: &'a Marketplace, provider_id: impl Into<String>) -> Self {
        let provider_id = provider_id.into();
        Self {
            market,
            actor: Actor::provider(provider_id.clone()),
            provider_id,
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn accept(&self, reservation_id: &str) -> DomainResult<Reservation> {
        self.market.reservations().accept(reservation_id, &self.actor)
    }

    pub fn refuse(&self, reservation_id: &str) -> DomainResult<Reservation> {
        self.market.reservations().refuse(reservation_id, &self.actor)
    }

    pub fn complete(&self, reservation_id: &str) -> DomainResult<Reservation> {
        self.market.reservations().complete(reservation_id, &self.actor)
    }

    pub fn requests(&self) -> DomainResult<Vec<Reservation>> {
        self.market.reservations().list_for_provider(&self.provider_id)
    }

    pub fn snapshot(&self) -> DomainResult<ProviderDashboard> {
        let provider = self.market.providers().get(&self.provider_id)?;
        let requests = self.requests()?;
        let stats = ProviderStats::compute(&requests);
        let (pending, history): (Vec<_>, Vec<_>) =
            requests.into_iter().partition(Reservation::is_pending);

        Ok(ProviderDashboard {
            provider,
            stats,
            pending: rows(pending),
            history: rows(history),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::domain::{DomainError, ReservationStatus};
    use crate::Marketplace;

    #[test]
    fn answering_moves_request_to_history() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let r = market.client_view("client-3").reserve("electricite").unwrap();
        let view = market.provider_view("prov-1");

        let before = view.snapshot().unwrap();
        assert!(before.pending.iter().any(|row| row.reservation.id == r.id));

        view.refuse(&r.id).unwrap();
        let after = view.snapshot().unwrap();
        assert_eq!(after.pending.len(), before.pending.len() - 1);
        let row = after
            .history
            .iter()
            .find(|row| row.reservation.id == r.id)
            .unwrap();
        assert_eq!(row.reservation.status, ReservationStatus::Refused);
        assert_eq!(after.stats.total_requests, before.stats.total_requests);
    }

    #[test]
    fn cannot_touch_another_providers_request() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let r = market.client_view("client-3").reserve("electricite").unwrap();
        assert!(matches!(
            market.provider_view("prov-2").accept(&r.id),
            Err(DomainError::Forbidden(_))
        ));
    }

    #[test]
    fn accept_is_visible_to_client_and_admin() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let r = market.client_view("client-3").reserve("electricite").unwrap();
        market.provider_view("prov-1").accept(&r.id).unwrap();

        let client_feed = market.client_view("client-3").reservations().unwrap();
        assert_eq!(client_feed[0].status, ReservationStatus::Accepted);

        let admin = market.admin_view().snapshot().unwrap();
        let row = admin
            .reservations
            .iter()
            .find(|row| row.reservation.id == r.id)
            .unwrap();
        assert_eq!(row.status_label, "Acceptée");
    }
}
