//! Provider directory: moderation status of every provider

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{DomainError, DomainResult, Provider, ProviderStatus, RepositoryProvider};
use crate::notifications::{Event, ProviderStatusChangedEvent, SharedEventBus};

pub struct ProviderService {
    repos: Arc<dyn RepositoryProvider>,
    events: SharedEventBus,
}

impl ProviderService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, events: SharedEventBus) -> Self {
        Self { repos, events }
    }

    /// pending -> active
    pub fn approve(&self, provider_id: &str) -> DomainResult<Provider> {
        self.moderate(provider_id, "approve", Provider::approve)
    }

    /// active -> inactive
    pub fn suspend(&self, provider_id: &str) -> DomainResult<Provider> {
        self.moderate(provider_id, "suspend", Provider::suspend)
    }

    /// inactive -> active
    pub fn reinstate(&self, provider_id: &str) -> DomainResult<Provider> {
        self.moderate(provider_id, "reinstate", Provider::reinstate)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn get(&self, provider_id: &str) -> DomainResult<Provider> {
        self.repos
            .providers()
            .find_by_id(provider_id)?
            .ok_or_else(|| DomainError::not_found("Provider", provider_id))
    }

    pub fn list_all(&self) -> DomainResult<Vec<Provider>> {
        self.repos.providers().find_all()
    }

    pub fn list_active(&self) -> DomainResult<Vec<Provider>> {
        self.repos.providers().find_by_status(ProviderStatus::Active)
    }

    pub fn list_pending(&self) -> DomainResult<Vec<Provider>> {
        self.repos.providers().find_by_status(ProviderStatus::Pending)
    }

    fn moderate(
        &self,
        provider_id: &str,
        action: &'static str,
        apply: fn(&mut Provider) -> DomainResult<()>,
    ) -> DomainResult<Provider> {
        let mut from = self.get(provider_id)?.status;
        let result = self.repos.providers().modify(provider_id, &mut |p| {
            from = p.status;
            apply(p)
        });
        let provider = match result {
            Ok(provider) => provider,
            Err(e) => {
                warn!(provider_id, action, from = %from, "Moderation rejected");
                return Err(e);
            }
        };

        metrics::counter!("provider_moderation_total", "action" => action).increment(1);
        info!(provider_id, from = %from, to = %provider.status, "Provider status changed");

        self.events
            .publish(Event::ProviderStatusChanged(ProviderStatusChangedEvent {
                provider_id: provider.id.clone(),
                from,
                to: provider.status,
                timestamp: Utc::now(),
            }));

        Ok(provider)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{fixture, Fixture};

    #[test]
    fn approve_pending_provider() {
        let Fixture { providers, .. } = fixture();
        assert_eq!(providers.list_pending().unwrap().len(), 1);

        let p = providers.approve("prov-3").unwrap();
        assert_eq!(p.status, ProviderStatus::Active);
        assert!(providers.list_pending().unwrap().is_empty());
        assert_eq!(providers.list_active().unwrap().len(), 3);
    }

    #[test]
    fn approve_twice_fails() {
        let Fixture { providers, .. } = fixture();
        providers.approve("prov-3").unwrap();
        assert!(matches!(
            providers.approve("prov-3"),
            Err(DomainError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn suspend_requires_active() {
        let Fixture { providers, .. } = fixture();
        assert!(matches!(
            providers.suspend("prov-3"),
            Err(DomainError::InvalidTransition { from: "pending", .. })
        ));
        assert_eq!(providers.get("prov-3").unwrap().status, ProviderStatus::Pending);
    }

    #[test]
    fn suspend_then_reinstate() {
        let Fixture { providers, .. } = fixture();
        providers.suspend("prov-1").unwrap();
        assert_eq!(providers.get("prov-1").unwrap().status, ProviderStatus::Inactive);
        assert!(providers.list_active().unwrap().iter().all(|p| p.id != "prov-1"));

        providers.reinstate("prov-1").unwrap();
        assert!(providers.get("prov-1").unwrap().is_active());
    }

    #[test]
    fn unknown_provider() {
        let Fixture { providers, .. } = fixture();
        assert!(matches!(
            providers.approve("prov-404"),
            Err(DomainError::NotFound { entity: "Provider", .. })
        ));
    }

    #[test]
    fn suspended_provider_cannot_be_booked() {
        let Fixture { providers, reservations, .. } = fixture();
        providers.suspend("prov-1").unwrap();
        assert!(matches!(
            reservations.create("elec", "client-1"),
            Err(DomainError::ProviderUnavailable(_))
        ));
        providers.reinstate("prov-1").unwrap();
        assert!(reservations.create("elec", "client-1").is_ok());
    }

    #[test]
    fn moderation_publishes_event() {
        let Fixture { providers, events, .. } = fixture();
        let mut sub = events.subscribe();
        providers.approve("prov-3").unwrap();
        let _ = providers.approve("prov-3");

        let messages = sub.drain();
        assert_eq!(messages.len(), 1);
        match &messages[0].event {
            Event::ProviderStatusChanged(e) => {
                assert_eq!(e.from, ProviderStatus::Pending);
                assert_eq!(e.to, ProviderStatus::Active);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
