//! In-memory storage implementation
//!
//! One instance per session; nothing survives a reload.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::domain::{
    CatalogEntry, CatalogRepository, Client, ClientRepository, DomainError, DomainResult,
    Provider, ProviderRepository, ProviderStatus, RepositoryProvider, Reservation,
    ReservationRepository,
};

/// Values kept with their insertion number so listings stay stable.
struct Ordered<T> {
    sequence: u64,
    value: T,
}

fn sorted<T: Clone>(map: &DashMap<String, Ordered<T>>, keep: impl Fn(&T) -> bool) -> Vec<T> {
    let mut items: Vec<(u64, T)> = map
        .iter()
        .filter(|e| keep(&e.value().value))
        .map(|e| (e.value().sequence, e.value().value.clone()))
        .collect();
    items.sort_by_key(|(sequence, _)| *sequence);
    items.into_iter().map(|(_, value)| value).collect()
}

// ── Catalog ────────────────────────────────────────────────────

/// Catalog held in memory. `upsert` is the collaborator-side write path.
#[derive(Default)]
pub struct InMemoryCatalog {
    entries: DashMap<String, Ordered<CatalogEntry>>,
    counter: AtomicU64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let catalog = Self::new();
        for entry in entries {
            catalog.upsert(entry);
        }
        catalog
    }

    /// Insert or replace an entry, keeping its original position.
    pub fn upsert(&self, entry: CatalogEntry) {
        let sequence = self
            .entries
            .get(&entry.id)
            .map(|e| e.sequence)
            .unwrap_or_else(|| self.counter.fetch_add(1, Ordering::SeqCst));
        self.entries
            .insert(entry.id.clone(), Ordered { sequence, value: entry });
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn find_by_id(&self, id: &str) -> DomainResult<Option<CatalogEntry>> {
        Ok(self.entries.get(id).map(|e| e.value.clone()))
    }

    fn find_all(&self) -> DomainResult<Vec<CatalogEntry>> {
        Ok(sorted(&self.entries, |_| true))
    }
}

// ── Clients ────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: DashMap<String, Ordered<Client>>,
    counter: AtomicU64,
}

impl ClientRepository for InMemoryClientRepository {
    fn save(&self, client: Client) -> DomainResult<()> {
        if self.clients.contains_key(&client.id) {
            return Err(DomainError::Validation(format!(
                "client {} already exists",
                client.id
            )));
        }
        let sequence = self.counter.fetch_add(1, Ordering::SeqCst);
        self.clients
            .insert(client.id.clone(), Ordered { sequence, value: client });
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> DomainResult<Option<Client>> {
        Ok(self.clients.get(id).map(|e| e.value.clone()))
    }

    fn find_by_email(&self, email: &str) -> DomainResult<Option<Client>> {
        Ok(self
            .clients
            .iter()
            .find(|e| e.value.email.eq_ignore_ascii_case(email))
            .map(|e| e.value.clone()))
    }

    fn find_all(&self) -> DomainResult<Vec<Client>> {
        Ok(sorted(&self.clients, |_| true))
    }
}

// ── Providers ──────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryProviderRepository {
    providers: DashMap<String, Ordered<Provider>>,
    counter: AtomicU64,
}

impl ProviderRepository for InMemoryProviderRepository {
    fn save(&self, provider: Provider) -> DomainResult<()> {
        if self.providers.contains_key(&provider.id) {
            return Err(DomainError::Validation(format!(
                "provider {} already exists",
                provider.id
            )));
        }
        let sequence = self.counter.fetch_add(1, Ordering::SeqCst);
        self.providers
            .insert(provider.id.clone(), Ordered { sequence, value: provider });
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> DomainResult<Option<Provider>> {
        Ok(self.providers.get(id).map(|e| e.value.clone()))
    }

    fn modify(
        &self,
        id: &str,
        change: &mut dyn FnMut(&mut Provider) -> DomainResult<()>,
    ) -> DomainResult<Provider> {
        let mut entry = self
            .providers
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("Provider", id))?;
        let mut draft = entry.value.clone();
        change(&mut draft)?;
        entry.value = draft.clone();
        Ok(draft)
    }

    fn find_all(&self) -> DomainResult<Vec<Provider>> {
        Ok(sorted(&self.providers, |_| true))
    }

    fn find_by_status(&self, status: ProviderStatus) -> DomainResult<Vec<Provider>> {
        Ok(sorted(&self.providers, |p| p.status == status))
    }
}

// ── Reservations ───────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryReservationRepository {
    reservations: DashMap<String, Reservation>,
    counter: AtomicU64,
}

impl InMemoryReservationRepository {
    fn collect(&self, keep: impl Fn(&Reservation) -> bool) -> Vec<Reservation> {
        let mut items: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| keep(r.value()))
            .map(|r| r.value().clone())
            .collect();
        items.sort_by_key(|r| r.sequence);
        items
    }
}

impl ReservationRepository for InMemoryReservationRepository {
    fn save(&self, reservation: Reservation) -> DomainResult<()> {
        if self.reservations.contains_key(&reservation.id) {
            return Err(DomainError::Validation(format!(
                "reservation {} already exists",
                reservation.id
            )));
        }
        self.reservations.insert(reservation.id.clone(), reservation);
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(id).map(|r| r.clone()))
    }

    fn modify(
        &self,
        id: &str,
        change: &mut dyn FnMut(&mut Reservation) -> DomainResult<()>,
    ) -> DomainResult<Reservation> {
        let mut entry = self
            .reservations
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("Reservation", id))?;
        let mut draft = entry.value().clone();
        change(&mut draft)?;
        *entry = draft.clone();
        Ok(draft)
    }

    fn delete(&self, id: &str) -> DomainResult<Reservation> {
        self.reservations
            .remove(id)
            .map(|(_, r)| r)
            .ok_or_else(|| DomainError::not_found("Reservation", id))
    }

    fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        Ok(self.collect(|_| true))
    }

    fn find_by_client(&self, client_id: &str) -> DomainResult<Vec<Reservation>> {
        Ok(self.collect(|r| r.client_id == client_id))
    }

    fn find_by_provider(&self, provider_id: &str) -> DomainResult<Vec<Reservation>> {
        Ok(self.collect(|r| r.provider_id == provider_id))
    }

    fn next_sequence(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

// ── Provider ───────────────────────────────────────────────────

/// In-memory `RepositoryProvider` for one session
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    catalog: InMemoryCatalog,
    clients: InMemoryClientRepository,
    providers: InMemoryProviderRepository,
    reservations: InMemoryReservationRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new(catalog: InMemoryCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Direct access to the catalog's collaborator-side write path.
    pub fn catalog_store(&self) -> &InMemoryCatalog {
        &self.catalog
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn catalog(&self) -> &dyn CatalogRepository {
        &self.catalog
    }

    fn clients(&self) -> &dyn ClientRepository {
        &self.clients
    }

    fn providers(&self) -> &dyn ProviderRepository {
        &self.providers
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

// ── Tests ──────────────────────────────────────────────────────
