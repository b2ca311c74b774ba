//! # GeoService marketplace core
//!
//! In-process core of a local-services marketplace for Cameroon: clients
//! book catalog services, providers answer the requests addressed to them,
//! admins oversee reservations and moderate providers.
//!
//! ## Architecture
//!
//! - **domain**: entities, status state machines and repository traits
//! - **application**: reservation, provider, statistics and registration
//!   services, plus the client / provider / admin views
//! - **infrastructure**: in-memory storage and demo seed data
//! - **notifications**: change events broadcast after every mutation
//! - **marketplace**: wires one session together from [`AppConfig`]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod marketplace;
pub mod notifications;
pub mod support;

pub use config::{default_config_path, AppConfig};
pub use domain::{Actor, DomainError, DomainResult};
pub use marketplace::{init_tracing, Marketplace};
pub use notifications::{create_event_bus, Event, EventBus, SharedEventBus};
