//! Dashboard statistics, recomputed from the store on every read

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{DomainResult, ProviderStatus, RepositoryProvider, Reservation, ReservationStatus};

/// Admin dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AdminStats {
    pub total_reservations: usize,
    pub active_providers: usize,
    pub pending_providers: usize,
    /// Sum of completed reservation prices, FCFA
    pub total_revenue: u64,
    pub completed_jobs: usize,
}

/// Provider dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProviderStats {
    pub total_requests: usize,
    pub accepted_requests: usize,
    /// Sum of accepted reservation prices, FCFA
    pub revenue: u64,
}

fn sum_where(reservations: &[Reservation], status: ReservationStatus) -> (usize, u64) {
    reservations
        .iter()
        .filter(|r| r.status == status)
        .fold((0, 0), |(count, total): (usize, u64), r| {
            (count + 1, total.saturating_add(r.price))
        })
}

impl AdminStats {
    pub fn compute(reservations: &[Reservation], active_providers: usize, pending_providers: usize) -> Self {
        let (completed_jobs, total_revenue) = sum_where(reservations, ReservationStatus::Completed);
        Self {
            total_reservations: reservations.len(),
            active_providers,
            pending_providers,
            total_revenue,
            completed_jobs,
        }
    }
}

impl ProviderStats {
    pub fn compute(reservations: &[Reservation]) -> Self {
        let (accepted_requests, revenue) = sum_where(reservations, ReservationStatus::Accepted);
        Self {
            total_requests: reservations.len(),
            accepted_requests,
            revenue,
        }
    }
}

pub struct StatisticsService {
    repos: Arc<dyn RepositoryProvider>,
}

impl StatisticsService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub fn admin(&self) -> DomainResult<AdminStats> {
        let reservations = self.repos.reservations().find_all()?;
        let providers = self.repos.providers();
        Ok(AdminStats::compute(
            &reservations,
            providers.find_by_status(ProviderStatus::Active)?.len(),
            providers.find_by_status(ProviderStatus::Pending)?.len(),
        ))
    }

    pub fn provider(&self, provider_id: &str) -> DomainResult<ProviderStats> {
        let reservations = self.repos.reservations().find_by_provider(provider_id)?;
        Ok(ProviderStats::compute(&reservations))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{fixture, Fixture};
    use crate::domain::{Actor, CatalogRepository};

    #[test]
    fn empty_store() {
        let Fixture { stats, .. } = fixture();
        let s = stats.admin().unwrap();
        assert_eq!(s.total_reservations, 0);
        assert_eq!(s.total_revenue, 0);
        assert_eq!(s.active_providers, 2);
        assert_eq!(s.pending_providers, 1);
    }

    #[test]
    fn revenue_counts_only_completed() {
        let Fixture { reservations, stats, .. } = fixture();
        let admin = Actor::Admin;

        let a = reservations.create("elec", "client-1").unwrap();
        let b = reservations.create("clean", "client-2").unwrap();
        reservations.accept(&a.id, &admin).unwrap();
        reservations.accept(&b.id, &admin).unwrap();
        reservations.complete(&b.id, &admin).unwrap();

        let before = stats.admin().unwrap();
        assert_eq!(before.total_revenue, 15_000);
        assert_eq!(before.completed_jobs, 1);

        reservations.create("elec", "client-2").unwrap();
        let after = stats.admin().unwrap();
        assert_eq!(after.total_revenue, before.total_revenue);
        assert_eq!(after.total_reservations, 3);
    }

    #[test]
    fn revenue_saturates_instead_of_overflowing() {
        let Fixture { repos, reservations, stats, .. } = fixture();
        let mut entry = repos.catalog_store().find_by_id("elec").unwrap().unwrap();
        entry.price = u64::MAX;
        repos.catalog_store().upsert(entry);

        let admin = Actor::Admin;
        for _ in 0..2 {
            let r = reservations.create("elec", "client-1").unwrap();
            reservations.accept(&r.id, &admin).unwrap();
            reservations.complete(&r.id, &admin).unwrap();
        }

        assert_eq!(stats.admin().unwrap().total_revenue, u64::MAX);
        assert_eq!(stats.provider("prov-1").unwrap().revenue, 0);
    }

    #[test]
    fn provider_revenue_counts_accepted() {
        let Fixture { reservations, stats, .. } = fixture();
        let me = Actor::provider("prov-1");

        let a = reservations.create("elec", "client-1").unwrap();
        let b = reservations.create("elec", "client-2").unwrap();
        reservations.create("elec", "client-2").unwrap();
        reservations.accept(&a.id, &me).unwrap();
        reservations.refuse(&b.id, &me).unwrap();

        let s = stats.provider("prov-1").unwrap();
        assert_eq!(
            s,
            ProviderStats {
                total_requests: 3,
                accepted_requests: 1,
                revenue: 25_000,
            }
        );
        assert_eq!(stats.provider("prov-4").unwrap(), ProviderStats::default());
    }
}
