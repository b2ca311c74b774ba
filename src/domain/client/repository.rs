//! Client repository interface

use super::model::Client;
use crate::domain::DomainResult;

pub trait ClientRepository: Send + Sync {
    fn save(&self, client: Client) -> DomainResult<()>;

    fn find_by_id(&self, id: &str) -> DomainResult<Option<Client>>;

    fn find_by_email(&self, email: &str) -> DomainResult<Option<Client>>;

    /// All clients, in registration order
    fn find_all(&self) -> DomainResult<Vec<Client>>;
}
