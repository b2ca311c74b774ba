//! Catalog lookup interface

use super::model::CatalogEntry;
use crate::domain::DomainResult;

/// Read side of the catalog collaborator.
pub trait CatalogRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> DomainResult<Option<CatalogEntry>>;

    /// Entries in display order
    fn find_all(&self) -> DomainResult<Vec<CatalogEntry>>;
}
