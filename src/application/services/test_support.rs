//! Small fixed marketplace shared by the service tests

use std::sync::Arc;

use chrono::Utc;

use super::{ProviderService, RegistrationService, ReservationService, StatisticsService};
use crate::domain::{CatalogEntry, Client, Provider, ProviderStatus, RepositoryProvider};
use crate::infrastructure::{InMemoryCatalog, InMemoryRepositoryProvider};
use crate::notifications::{create_event_bus, SharedEventBus};

pub(crate) struct Fixture {
    pub repos: Arc<InMemoryRepositoryProvider>,
    pub reservations: ReservationService,
    pub providers: ProviderService,
    pub stats: StatisticsService,
    pub registration: RegistrationService,
    pub events: SharedEventBus,
}

fn entry(id: &str, title: &str, provider_id: &str, provider_name: &str, price: u64) -> CatalogEntry {
    CatalogEntry {
        id: id.into(),
        title: title.into(),
        provider_id: provider_id.into(),
        provider_name: provider_name.into(),
        price,
        category: "Test".into(),
        rating: 4.5,
    }
}

fn client(id: &str, first: &str, last: &str) -> Client {
    Client {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        phone: "+237 6 00 00 00 00".into(),
        email: format!("{}@example.cm", id),
        city: "Douala".into(),
        district: "Akwa".into(),
        registered_at: Utc::now(),
    }
}

/// Catalog `elec` (prov-1, active), `clean` (prov-4, active) and
/// `heater` (prov-3, pending); clients `client-1` and `client-2`.
pub(crate) fn fixture() -> Fixture {
    let catalog = InMemoryCatalog::from_entries([
        entry("elec", "Électricité", "prov-1", "David Electric", 25_000),
        entry("clean", "Ménage à domicile", "prov-4", "Aqua Service", 15_000),
        entry("heater", "Réparation des chauffe-eau", "prov-3", "Jordan Marc", 40_000),
    ]);
    let repos = Arc::new(InMemoryRepositoryProvider::new(catalog));

    for (id, name, service, status) in [
        ("prov-1", "David Electric", "Électricité", ProviderStatus::Active),
        ("prov-3", "Jordan Marc", "Réparation chauffe-eau", ProviderStatus::Pending),
        ("prov-4", "Aqua Service", "Ménage à domicile", ProviderStatus::Active),
    ] {
        repos
            .providers()
            .save(Provider::new(id, name, vec![service.into()], status))
            .unwrap();
    }
    repos.clients().save(client("client-1", "Jean", "Dupont")).unwrap();
    repos.clients().save(client("client-2", "Marie", "Kouam")).unwrap();

    let events = create_event_bus(64);
    let shared: Arc<dyn RepositoryProvider> = repos.clone();

    Fixture {
        reservations: ReservationService::new(shared.clone(), events.clone()),
        providers: ProviderService::new(shared.clone(), events.clone()),
        stats: StatisticsService::new(shared.clone()),
        registration: RegistrationService::new(shared, events.clone()),
        repos,
        events,
    }
}
