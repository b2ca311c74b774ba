//! Service catalog

pub mod model;
pub mod repository;

pub use model::CatalogEntry;
pub use repository::CatalogRepository;
