//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::catalog::CatalogRepository;
use super::client::ClientRepository;
use super::provider::ProviderRepository;
use super::reservation::ReservationRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Services hold one `Arc<dyn RepositoryProvider>` and request only the
/// repository they need:
///
/// ```ignore
/// fn handle(repos: &dyn RepositoryProvider) -> DomainResult<()> {
///     let entry = repos.catalog().find_by_id("electricite")?;
///     let mine = repos.reservations().find_by_client("client-1")?;
///     Ok(())
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn catalog(&self) -> &dyn CatalogRepository;
    fn clients(&self) -> &dyn ClientRepository;
    fn providers(&self) -> &dyn ProviderRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}
