//! Provider repository interface

use super::model::{Provider, ProviderStatus};
use crate::domain::DomainResult;

pub trait ProviderRepository: Send + Sync {
    fn save(&self, provider: Provider) -> DomainResult<()>;

    fn find_by_id(&self, id: &str) -> DomainResult<Option<Provider>>;

    /// Apply `change` in place under the entry lock.
    fn modify(
        &self,
        id: &str,
        change: &mut dyn FnMut(&mut Provider) -> DomainResult<()>,
    ) -> DomainResult<Provider>;

    /// All providers, in registration order
    fn find_all(&self) -> DomainResult<Vec<Provider>>;

    fn find_by_status(&self, status: ProviderStatus) -> DomainResult<Vec<Provider>>;
}
