//! Application services

mod provider;
mod registration;
mod reservation;
mod statistics;

#[cfg(test)]
pub(crate) mod test_support;

pub use provider::ProviderService;
pub use registration::{
    ClientRegistration, ProviderRegistration, RegistrationService, AVAILABLE_SERVICES,
    CAMEROON_CITIES,
};
pub use reservation::ReservationService;
pub use statistics::{AdminStats, ProviderStats, StatisticsService};
