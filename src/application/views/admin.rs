use serde::Serialize;

use super::{rows, ProviderRow, ReservationRow};
use crate::application::services::AdminStats;
use crate::domain::{Actor, DomainResult, Provider, Reservation};
use crate::support::money::format_fcfa;
use crate::Marketplace;

/// Admin dashboard: oversight of every reservation plus provider moderation
pub struct AdminView<'a> {
    market: &'a Marketplace,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub stats: AdminStats,
    pub revenue_label: String,
    pub reservations: Vec<ReservationRow>,
    pub providers: Vec<ProviderRow>,
}

impl<'a> AdminView<'a> {
    pub(crate) fn new(market: &'a Marketplace) -> Self {
        Self { market }
    }

    pub fn accept(&self, reservation_id: &str) -> DomainResult<Reservation> {
        self.market.reservations().accept(reservation_id, &Actor::Admin)
    }

    pub fn refuse(&self, reservation_id: &str) -> DomainResult<Reservation> {
        self.market.reservations().refuse(reservation_id, &Actor::Admin)
    }

    pub fn complete(&self, reservation_id: &str) -> DomainResult<Reservation> {
        self.market.reservations().complete(reservation_id, &Actor::Admin)
    }

    pub fn delete(&self, reservation_id: &str) -> DomainResult<()> {
        self.market.reservations().delete(reservation_id, &Actor::Admin)
    }

    pub fn approve(&self, provider_id: &str) -> DomainResult<Provider> {
        self.market.providers().approve(provider_id)
    }

    pub fn suspend(&self, provider_id: &str) -> DomainResult<Provider> {
        self.market.providers().suspend(provider_id)
    }

    pub fn reinstate(&self, provider_id: &str) -> DomainResult<Provider> {
        self.market.providers().reinstate(provider_id)
    }

    pub fn snapshot(&self) -> DomainResult<AdminDashboard> {
        let stats = self.market.statistics().admin()?;
        Ok(AdminDashboard {
            revenue_label: format_fcfa(stats.total_revenue),
            stats,
            reservations: rows(self.market.reservations().list_all()?),
            providers: rows(self.market.providers().list_all()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::domain::ProviderStatus;
    use crate::Marketplace;

    #[test]
    fn demo_dashboard_matches_seed() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let dash = market.admin_view().snapshot().unwrap();

        assert_eq!(dash.stats.total_reservations, 3);
        assert_eq!(dash.stats.completed_jobs, 1);
        assert_eq!(dash.stats.total_revenue, 15_000);
        assert_eq!(dash.revenue_label, "15 000 FCFA");
        assert_eq!(dash.stats.active_providers, 5);
        assert_eq!(dash.stats.pending_providers, 1);
        assert_eq!(dash.providers.len(), 6);
    }

    #[test]
    fn moderation_updates_dashboard() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let admin = market.admin_view();

        admin.approve("prov-3").unwrap();
        admin.suspend("prov-6").unwrap();

        let dash = admin.snapshot().unwrap();
        assert_eq!(dash.stats.pending_providers, 0);
        assert_eq!(dash.stats.active_providers, 5);
        let pc = dash.providers.iter().find(|p| p.provider.id == "prov-6").unwrap();
        assert_eq!(pc.provider.status, ProviderStatus::Inactive);
        assert_eq!(pc.status_label, "Suspendu");

        admin.reinstate("prov-6").unwrap();
        assert_eq!(admin.snapshot().unwrap().stats.active_providers, 6);
    }

    #[test]
    fn delete_removes_from_every_view() {
        let market = Marketplace::new(&AppConfig::default()).unwrap();
        let admin = market.admin_view();
        let first = admin.snapshot().unwrap().reservations[0].reservation.clone();

        admin.delete(&first.id).unwrap();

        assert!(admin
            .snapshot()
            .unwrap()
            .reservations
            .iter()
            .all(|row| row.reservation.id != first.id));
        assert!(market
            .client_view(first.client_id.as_str())
            .reservations()
            .unwrap()
            .iter()
            .all(|r| r.id != first.id));
    }
}
