//! Registration intake for clients and providers
//!
//! Forms are trimmed, validated as a whole (all field errors reported at
//! once), and only then admitted. Passwords are checked for confirmation
//! and dropped; storing credentials belongs to the identity service.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{Client, DomainError, DomainResult, Provider, ProviderStatus, RepositoryProvider};
use crate::notifications::{ClientRegisteredEvent, Event, ProviderRegisteredEvent, SharedEventBus};

pub const CAMEROON_CITIES: &[&str] = &[
    "Douala", "Yaoundé", "Garoua", "Bamenda", "Bafoussam", "Maroua", "Ngaoundéré", "Kribi",
    "Ebolowa", "Bertoua", "Foumban", "Kumbo", "Mbalmayo", "Bengui", "Autre",
];

pub const AVAILABLE_SERVICES: &[&str] = &[
    "Électricité",
    "Plomberie",
    "Ménage à domicile",
    "Jardinage & Entretien",
    "Dépannage Informatique",
    "Réparation chauffe-eau",
    "Climatisation",
    "Maçonnerie",
    "Peinture",
    "Menuiserie",
    "Soudure",
    "Mécanique auto",
];

fn known_city(city: &str) -> Result<(), ValidationError> {
    if city.is_empty() || CAMEROON_CITIES.contains(&city) {
        return Ok(());
    }
    let mut err = ValidationError::new("unknown_city");
    err.message = Some(format!("unknown city '{}'", city).into());
    Err(err)
}

fn known_services(services: &[String]) -> Result<(), ValidationError> {
    match services.iter().find(|s| !AVAILABLE_SERVICES.contains(&s.as_str())) {
        None => Ok(()),
        Some(unknown) => {
            let mut err = ValidationError::new("unknown_service");
            err.message = Some(format!("unknown service '{}'", unknown).into());
            Err(err)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ClientRegistration {
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(
        length(min = 1, message = "city is required"),
        custom(function = "known_city")
    )]
    pub city: String,
    #[validate(length(min = 1, message = "district is required"))]
    pub district: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
    pub accept_terms: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ProviderRegistration {
    #[validate(length(min = 1, message = "business name is required"))]
    pub business_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(
        length(min = 1, message = "city is required"),
        custom(function = "known_city")
    )]
    pub city: String,
    #[validate(length(min = 1, message = "district is required"))]
    pub district: String,
    #[validate(
        length(min = 1, message = "select at least one service"),
        custom(function = "known_services")
    )]
    pub selected_services: Vec<String>,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "experience is required"))]
    pub experience: String,
    /// Uploaded file names; optional
    pub documents: Vec<String>,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
    pub accept_terms: bool,
}

fn trim(field: &mut String) {
    let trimmed = field.trim();
    if trimmed.len() != field.len() {
        *field = trimmed.to_string();
    }
}

impl ClientRegistration {
    fn normalize(&mut self) {
        for field in [
            &mut self.last_name,
            &mut self.first_name,
            &mut self.phone,
            &mut self.email,
            &mut self.city,
            &mut self.district,
        ] {
            trim(field);
        }
    }
}

impl ProviderRegistration {
    fn normalize(&mut self) {
        for field in [
            &mut self.business_name,
            &mut self.last_name,
            &mut self.first_name,
            &mut self.phone,
            &mut self.email,
            &mut self.city,
            &mut self.district,
            &mut self.description,
            &mut self.experience,
        ] {
            trim(field);
        }

        let mut seen = Vec::with_capacity(self.selected_services.len());
        for service in self.selected_services.drain(..) {
            let service = service.trim().to_string();
            if !service.is_empty() && !seen.contains(&service) {
                seen.push(service);
            }
        }
        self.selected_services = seen;
        self.documents.retain(|d| !d.trim().is_empty());
    }
}

/// Flatten field errors into one message, sorted by field name so the
/// text is stable.
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();
    messages.sort();
    messages
}

fn check(result: Result<(), ValidationErrors>, accept_terms: bool) -> DomainResult<()> {
    let mut messages = match result {
        Ok(()) => Vec::new(),
        Err(errors) => validation_messages(&errors),
    };
    if !accept_terms {
        messages.push("accept_terms: the terms of use must be accepted".to_string());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(messages.join("; ")))
    }
}

pub struct RegistrationService {
    repos: Arc<dyn RepositoryProvider>,
    events: SharedEventBus,
}

impl RegistrationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, events: SharedEventBus) -> Self {
        Self { repos, events }
    }

    pub fn register_client(&self, mut form: ClientRegistration) -> DomainResult<Client> {
        form.normalize();
        if let Err(e) = check(form.validate(), form.accept_terms) {
            warn!(error = %e, "Client registration rejected");
            return Err(e);
        }

        if self.repos.clients().find_by_email(&form.email)?.is_some() {
            return Err(DomainError::Validation(format!(
                "email: {} is already registered",
                form.email
            )));
        }

        let client = Client {
            id: Client::new_id(),
            first_name: form.first_name,
            last_name: form.last_name,
            phone: form.phone,
            email: form.email,
            city: form.city,
            district: form.district,
            registered_at: Utc::now(),
        };
        self.repos.clients().save(client.clone())?;

        metrics::counter!("registrations_total", "kind" => "client").increment(1);
        info!(client_id = %client.id, city = %client.city, "New client registered");

        self.events.publish(Event::ClientRegistered(ClientRegisteredEvent {
            client_id: client.id.clone(),
            city: client.city.clone(),
            timestamp: client.registered_at,
        }));

        Ok(client)
    }

    /// Admit a provider in `pending` status, awaiting admin approval.
    pub fn register_provider(&self, mut form: ProviderRegistration) -> DomainResult<Provider> {
        form.normalize();
        if let Err(e) = check(form.validate(), form.accept_terms) {
            warn!(error = %e, "Provider registration rejected");
            return Err(e);
        }

        let email_taken = self
            .repos
            .providers()
            .find_all()?
            .iter()
            .any(|p| p.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(&form.email)));
        if email_taken {
            return Err(DomainError::Validation(format!(
                "email: {} is already registered",
                form.email
            )));
        }

        let mut provider = Provider::new(
            Provider::new_id(),
            form.business_name,
            form.selected_services,
            ProviderStatus::Pending,
        );
        provider.phone = Some(form.phone);
        provider.email = Some(form.email);
        provider.city = Some(form.city);
        provider.district = Some(form.district);
        provider.description = Some(form.description);
        provider.experience = Some(form.experience);
        provider.documents = form.documents;

        self.repos.providers().save(provider.clone())?;

        metrics::counter!("registrations_total", "kind" => "provider").increment(1);
        info!(
            provider_id = %provider.id,
            name = %provider.name,
            services = provider.services.len(),
            documents = provider.documents.len(),
            "New provider registered, awaiting approval"
        );

        self.events.publish(Event::ProviderRegistered(ProviderRegisteredEvent {
            provider_id: provider.id.clone(),
            name: provider.name.clone(),
            services: provider.services.clone(),
            timestamp: provider.registered_at,
        }));

        Ok(provider)
    }
}

// ── Tests ──────────────────────────────────────────────────────
