//! Marketplace runtime.
//!
//! [`Marketplace`] wires one in-memory store, the services and the event
//! bus together from an [`AppConfig`]. It is the single shared instance
//! behind every dashboard of a session; the CLI and any embedding UI
//! shell build it the same way.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::services::{
    ProviderService, RegistrationService, ReservationService, StatisticsService,
};
use crate::application::views::{AdminView, ClientView, ProviderView};
use crate::config::AppConfig;
use crate::domain::{Actor, CatalogEntry, Client, DomainError, DomainResult, Provider, RepositoryProvider};
use crate::infrastructure::seed;
use crate::infrastructure::{InMemoryCatalog, InMemoryRepositoryProvider};
use crate::notifications::{create_event_bus, EventSubscriber, SharedEventBus};

/// Handle to one marketplace session.
///
/// # Examples
///
/// ```rust
/// use geoservice::{AppConfig, Marketplace};
///
/// let market = Marketplace::new(&AppConfig::default()).unwrap();
/// let r = market.client_view("client-1").reserve("electricite").unwrap();
/// market.provider_view("prov-1").accept(&r.id).unwrap();
/// ```
pub struct Marketplace {
    /// Shared event bus for change notifications.
    pub event_bus: SharedEventBus,
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,

    reservations: ReservationService,
    providers: ProviderService,
    statistics: StatisticsService,
    registration: RegistrationService,
}

impl Marketplace {
    /// Build and seed a marketplace.
    ///
    /// The catalog and provider directory come from the config tables,
    /// or the built-in demo data when those are empty. With
    /// `seed.demo_data`, demo clients are added and, on the built-in data,
    /// three demo reservations are driven through the lifecycle.
    pub fn new(config: &AppConfig) -> DomainResult<Self> {
        let builtin = config.catalog.is_empty() && config.providers.is_empty();

        let catalog = if config.catalog.is_empty() {
            seed::demo_catalog()
        } else {
            config.catalog.clone()
        };
        let directory = if config.providers.is_empty() {
            seed::demo_providers()
        } else {
            config.providers.clone()
        };

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(InMemoryRepositoryProvider::new(InMemoryCatalog::from_entries(catalog)));

        for entry in directory {
            repos.providers().save(Provider::from(entry))?;
        }
        for entry in repos.catalog().find_all()? {
            if repos.providers().find_by_id(&entry.provider_id)?.is_none() {
                warn!(
                    service_id = %entry.id,
                    provider_id = %entry.provider_id,
                    "Catalog entry points at an unknown provider"
                );
            }
        }

        let event_bus = create_event_bus(config.events.capacity);
        info!(capacity = config.events.capacity, "Event bus initialized");

        let market = Self {
            reservations: ReservationService::new(repos.clone(), event_bus.clone()),
            providers: ProviderService::new(repos.clone(), event_bus.clone()),
            statistics: StatisticsService::new(repos.clone()),
            registration: RegistrationService::new(repos.clone(), event_bus.clone()),
            repos,
            event_bus,
        };

        if config.seed.demo_data {
            for client in seed::demo_clients() {
                market.repos.clients().save(client)?;
            }
            if builtin {
                market.walk_demo_reservations()?;
            } else {
                info!("Custom catalog configured, skipping demo reservations");
            }
        }

        info!(
            services = market.repos.catalog().find_all()?.len(),
            providers = market.repos.providers().find_all()?.len(),
            clients = market.repos.clients().find_all()?.len(),
            reservations = market.repos.reservations().find_all()?.len(),
            "Marketplace ready"
        );

        Ok(market)
    }

    /// One pending, one accepted and one completed reservation, each
    /// produced by the real operations.
    fn walk_demo_reservations(&self) -> DomainResult<()> {
        self.reservations.create("electricite", "client-1")?;

        let accepted = self.reservations.create("plomberie", "client-2")?;
        self.reservations
            .accept(&accepted.id, &Actor::provider(accepted.provider_id.clone()))?;

        let done = self.reservations.create("menage", "client-3")?;
        let provider = Actor::provider(done.provider_id.clone());
        self.reservations.accept(&done.id, &provider)?;
        self.reservations.complete(&done.id, &provider)?;

        Ok(())
    }

    // ── Services ───────────────────────────────────────────────────

    pub fn reservations(&self) -> &ReservationService {
        &self.reservations
    }

    pub fn providers(&self) -> &ProviderService {
        &self.providers
    }

    pub fn statistics(&self) -> &StatisticsService {
        &self.statistics
    }

    pub fn registration(&self) -> &RegistrationService {
        &self.registration
    }

    pub fn catalog(&self) -> DomainResult<Vec<CatalogEntry>> {
        self.repos.catalog().find_all()
    }

    pub fn client(&self, client_id: &str) -> DomainResult<Client> {
        self.repos
            .clients()
            .find_by_id(client_id)?
            .ok_or_else(|| DomainError::not_found("Client", client_id))
    }

    pub fn clients(&self) -> DomainResult<Vec<Client>> {
        self.repos.clients().find_all()
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> EventSubscriber {
        self.event_bus.subscribe()
    }

    // ── Views ──────────────────────────────────────────────────────

    pub fn client_view(&self, client_id: impl Into<String>) -> ClientView<'_> {
        ClientView::new(self, client_id)
    }

    pub fn provider_view(&self, provider_id: impl Into<String>) -> ProviderView<'_> {
        ProviderView::new(self, provider_id)
    }

    pub fn admin_view(&self) -> AdminView<'_> {
        AdminView::new(self)
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup. `RUST_LOG` wins over the configured
/// level.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────
