//! Provider aggregate
//!
//! Contains the Provider entity, its moderation status, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Provider, ProviderStatus};
pub use repository::ProviderRepository;
