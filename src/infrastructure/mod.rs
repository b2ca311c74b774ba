//! Infrastructure layer - storage and seed data

pub mod seed;
pub mod storage;

pub use storage::{InMemoryCatalog, InMemoryRepositoryProvider};
