//! Client aggregate

pub mod model;
pub mod repository;

pub use model::Client;
pub use repository::ClientRepository;
