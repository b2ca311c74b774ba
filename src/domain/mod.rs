pub mod actor;
pub mod catalog;
pub mod client;
pub mod provider;
pub mod repositories;
pub mod reservation;

// Re-export commonly used types
pub use actor::Actor;
pub use catalog::{CatalogEntry, CatalogRepository};
pub use client::{Client, ClientRepository};
pub use provider::{Provider, ProviderRepository, ProviderStatus};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{Reservation, ReservationRepository, ReservationStatus};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
