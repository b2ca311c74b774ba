//! Reservation repository interface

use super::model::Reservation;
use crate::domain::DomainResult;

pub trait ReservationRepository: Send + Sync {
    /// Save a new reservation
    fn save(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find reservation by ID
    fn find_by_id(&self, id: &str) -> DomainResult<Option<Reservation>>;

    /// Apply `change` to the stored reservation while holding its entry,
    /// returning the result. Nothing is written when `change` fails.
    fn modify(
        &self,
        id: &str,
        change: &mut dyn FnMut(&mut Reservation) -> DomainResult<()>,
    ) -> DomainResult<Reservation>;

    /// Remove a reservation, returning the removed record
    fn delete(&self, id: &str) -> DomainResult<Reservation>;

    /// All reservations, in insertion order
    fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Reservations requested by a client, in insertion order
    fn find_by_client(&self, client_id: &str) -> DomainResult<Vec<Reservation>>;

    /// Reservations addressed to a provider, in insertion order
    fn find_by_provider(&self, provider_id: &str) -> DomainResult<Vec<Reservation>>;

    /// Next insertion sequence number
    fn next_sequence(&self) -> u64;
}
