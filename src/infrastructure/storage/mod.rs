//! Storage implementations

mod memory;

pub use memory::{
    InMemoryCatalog, InMemoryClientRepository, InMemoryProviderRepository,
    InMemoryRepositoryProvider, InMemoryReservationRepository,
};
