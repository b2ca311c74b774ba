//! Application layer: services over the repositories and the role views
//! built on top of them.

pub mod services;
pub mod views;

pub use services::{
    AdminStats, ClientRegistration, ProviderRegistration, ProviderService, ProviderStats,
    RegistrationService, ReservationService, StatisticsService,
};
pub use views::{AdminDashboard, AdminView, ClientDashboard, ClientView, ProviderDashboard, ProviderView};
