//! Reservation store: the only mutation surface for reservations
//!
//! Client, provider and admin views all read and write through this
//! service, so a status change made in one view is what the others see.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    Actor, DomainError, DomainResult, RepositoryProvider, Reservation, ReservationStatus,
};
use crate::notifications::{
    Event, ReservationCreatedEvent, ReservationDeletedEvent, ReservationStatusChangedEvent,
    SharedEventBus,
};

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    events: SharedEventBus,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, events: SharedEventBus) -> Self {
        Self { repos, events }
    }

    /// Book a catalog service for a client.
    ///
    /// The price is copied from the catalog now and never recomputed.
    pub fn create(&self, service_id: &str, client_id: &str) -> DomainResult<Reservation> {
        let entry = self
            .repos
            .catalog()
            .find_by_id(service_id)?
            .ok_or_else(|| DomainError::not_found("Service", service_id))?;

        let client = self
            .repos
            .clients()
            .find_by_id(client_id)?
            .ok_or_else(|| DomainError::not_found("Client", client_id))?;

        let provider = self
            .repos
            .providers()
            .find_by_id(&entry.provider_id)?
            .ok_or_else(|| DomainError::not_found("Provider", &entry.provider_id))?;

        if !provider.is_active() {
            warn!(
                service_id,
                provider_id = %provider.id,
                status = %provider.status,
                "Booking rejected: provider not active"
            );
            return Err(DomainError::ProviderUnavailable(provider.id));
        }

        let reservation = Reservation {
            id: Reservation::new_id(),
            service_id: entry.id,
            service_name: entry.title,
            client_id: client.id.clone(),
            client_name: client.display_name(),
            provider_id: provider.id,
            provider_name: provider.name,
            status: ReservationStatus::Pending,
            date: Utc::now(),
            price: entry.price,
            sequence: self.repos.reservations().next_sequence(),
        };

        self.repos.reservations().save(reservation.clone())?;

        metrics::counter!("reservations_created_total").increment(1);
        info!(
            reservation_id = %reservation.id,
            client_id = %reservation.client_id,
            provider_id = %reservation.provider_id,
            price = reservation.price,
            "Reservation created"
        );

        self.events.publish(Event::ReservationCreated(ReservationCreatedEvent {
            reservation_id: reservation.id.clone(),
            client_id: reservation.client_id.clone(),
            provider_id: reservation.provider_id.clone(),
            service_id: reservation.service_id.clone(),
            price: reservation.price,
            timestamp: reservation.date,
        }));

        Ok(reservation)
    }

    /// pending -> accepted. Allowed for the addressed provider or an admin,
    /// and only while that provider is active.
    pub fn accept(&self, reservation_id: &str, actor: &Actor) -> DomainResult<Reservation> {
        let reservation = self.get(reservation_id)?;
        self.authorize(&reservation, actor, "accept")?;

        let provider = self
            .repos
            .providers()
            .find_by_id(&reservation.provider_id)?
            .ok_or_else(|| DomainError::not_found("Provider", &reservation.provider_id))?;
        if !provider.is_active() {
            warn!(
                reservation_id,
                provider_id = %provider.id,
                status = %provider.status,
                "Accept rejected: provider not active"
            );
            return Err(DomainError::ProviderUnavailable(provider.id));
        }

        self.transition(reservation_id, actor, "accept", Reservation::accept)
    }

    /// pending -> refused. Same actors as `accept`; a provider that is no
    /// longer active may still turn requests down.
    pub fn refuse(&self, reservation_id: &str, actor: &Actor) -> DomainResult<Reservation> {
        self.transition(reservation_id, actor, "refuse", Reservation::refuse)
    }

    /// accepted -> completed. Credits the provider with one finished job.
    pub fn complete(&self, reservation_id: &str, actor: &Actor) -> DomainResult<Reservation> {
        let reservation = self.transition(reservation_id, actor, "complete", Reservation::complete)?;

        self.repos
            .providers()
            .modify(&reservation.provider_id, &mut |p| {
                p.record_completed_job();
                Ok(())
            })?;

        Ok(reservation)
    }

    /// Admin-only hard delete. No undo.
    pub fn delete(&self, reservation_id: &str, actor: &Actor) -> DomainResult<()> {
        if !actor.is_admin() {
            warn!(reservation_id, actor = %actor, "Delete rejected: not an admin");
            return Err(DomainError::Forbidden(format!(
                "{} cannot delete reservations",
                actor.role()
            )));
        }

        let removed = self.repos.reservations().delete(reservation_id)?;

        metrics::counter!("reservation_transitions_total", "action" => "delete").increment(1);
        info!(
            reservation_id,
            status = %removed.status,
            "Reservation deleted"
        );

        self.events.publish(Event::ReservationDeleted(ReservationDeletedEvent {
            reservation_id: removed.id,
            timestamp: Utc::now(),
        }));

        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn get(&self, reservation_id: &str) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(reservation_id)?
            .ok_or_else(|| DomainError::not_found("Reservation", reservation_id))
    }

    /// Client feed, newest first
    pub fn list_for_client(&self, client_id: &str) -> DomainResult<Vec<Reservation>> {
        let mut reservations = self.repos.reservations().find_by_client(client_id)?;
        reservations.reverse();
        Ok(reservations)
    }

    /// Requests addressed to a provider, oldest first
    pub fn list_for_provider(&self, provider_id: &str) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_by_provider(provider_id)
    }

    /// Everything, oldest first
    pub fn list_all(&self) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_all()
    }

    fn authorize(
        &self,
        reservation: &Reservation,
        actor: &Actor,
        action: &'static str,
    ) -> DomainResult<()> {
        if actor.acts_for_provider(&reservation.provider_id) {
            return Ok(());
        }
        warn!(
            reservation_id = %reservation.id,
            actor = %actor,
            action,
            "Transition rejected: wrong actor"
        );
        Err(DomainError::Forbidden(format!(
            "{} cannot {} reservation {}",
            actor, action, reservation.id
        )))
    }

    fn transition(
        &self,
        reservation_id: &str,
        actor: &Actor,
        action: &'static str,
        apply: fn(&mut Reservation) -> DomainResult<()>,
    ) -> DomainResult<Reservation> {
        let current = self.get(reservation_id)?;
        self.authorize(&current, actor, action)?;

        // status as seen under the entry lock
        let mut from = current.status;
        let result = self.repos.reservations().modify(reservation_id, &mut |r| {
            from = r.status;
            apply(r)
        });
        let reservation = match result {
            Ok(reservation) => reservation,
            Err(e) => {
                warn!(reservation_id, action, from = %from, "Transition rejected");
                return Err(e);
            }
        };

        metrics::counter!("reservation_transitions_total", "action" => action).increment(1);
        info!(
            reservation_id,
            actor = %actor,
            from = %from,
            to = %reservation.status,
            "Reservation status changed"
        );

        self.events
            .publish(Event::ReservationStatusChanged(ReservationStatusChangedEvent {
                reservation_id: reservation.id.clone(),
                client_id: reservation.client_id.clone(),
                provider_id: reservation.provider_id.clone(),
                from,
                to: reservation.status,
                actor: actor.to_string(),
                timestamp: Utc::now(),
            }));

        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────
