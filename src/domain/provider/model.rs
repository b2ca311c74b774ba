//! Provider domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;
use crate::support::errors::DomainError;

/// Provider moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
    /// Approved and bookable
    Active,
    /// Suspended by an admin
    Inactive,
    /// Registered, waiting for approval
    Pending,
}

impl ProviderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Actif",
            Self::Inactive => "Suspendu",
            Self::Pending => "En attente",
        }
    }
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A service-offering business subject to admin moderation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    /// Business name shown to clients
    pub name: String,
    /// Offered services; the first one is the headline service
    pub services: Vec<String>,
    /// 0.0 - 5.0
    pub rating: f32,
    pub status: ProviderStatus,
    pub total_jobs_completed: u32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub description: Option<String>,
    pub experience: Option<String>,
    /// Names of uploaded supporting documents
    #[serde(default)]
    pub documents: Vec<String>,
    pub registered_at: DateTime<Utc>,
}

impl Provider {
    /// A directory entry with only the fields the dashboards need.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        services: Vec<String>,
        status: ProviderStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            services,
            rating: 0.0,
            status,
            total_jobs_completed: 0,
            phone: None,
            email: None,
            city: None,
            district: None,
            description: None,
            experience: None,
            documents: Vec::new(),
            registered_at: Utc::now(),
        }
    }

    pub fn new_id() -> String {
        format!("prov-{}", uuid::Uuid::new_v4())
    }

    pub fn service_offered(&self) -> &str {
        self.services.first().map(String::as_str).unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.status == ProviderStatus::Active
    }

    /// Admin approval: pending -> active
    pub fn approve(&mut self) -> DomainResult<()> {
        self.transition(ProviderStatus::Pending, ProviderStatus::Active, "approve")
    }

    /// Admin suspension: active -> inactive
    pub fn suspend(&mut self) -> DomainResult<()> {
        self.transition(ProviderStatus::Active, ProviderStatus::Inactive, "suspend")
    }

    /// Lift a suspension: inactive -> active
    pub fn reinstate(&mut self) -> DomainResult<()> {
        self.transition(ProviderStatus::Inactive, ProviderStatus::Active, "reinstate")
    }

    pub fn record_completed_job(&mut self) {
        self.total_jobs_completed = self.total_jobs_completed.saturating_add(1);
    }

    fn transition(
        &mut self,
        expected: ProviderStatus,
        next: ProviderStatus,
        action: &'static str,
    ) -> DomainResult<()> {
        if self.status != expected {
            return Err(DomainError::InvalidTransition {
                entity: "Provider",
                id: self.id.clone(),
                from: self.status.as_str(),
                action,
            });
        }
        self.status = next;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_provider() -> Provider {
        Provider::new(
            "prov-3",
            "Jordan Marc",
            vec!["Réparation chauffe-eau".into()],
            ProviderStatus::Pending,
        )
    }

    #[test]
    fn approve_activates_pending() {
        let mut p = pending_provider();
        p.approve().unwrap();
        assert!(p.is_active());
        assert!(p.approve().is_err());
    }

    #[test]
    fn suspend_requires_active() {
        let mut p = pending_provider();
        let err = p.suspend().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidTransition { entity: "Provider", from: "pending", .. }
        ));
        assert_eq!(p.status, ProviderStatus::Pending);
    }

    #[test]
    fn suspend_and_reinstate() {
        let mut p = pending_provider();
        p.approve().unwrap();
        p.suspend().unwrap();
        assert_eq!(p.status, ProviderStatus::Inactive);
        assert!(p.approve().is_err());
        p.reinstate().unwrap();
        assert!(p.is_active());
        assert!(p.reinstate().is_err());
    }

    #[test]
    fn headline_service_is_first() {
        let mut p = pending_provider();
        assert_eq!(p.service_offered(), "Réparation chauffe-eau");
        p.services.clear();
        assert_eq!(p.service_offered(), "");
    }

    #[test]
    fn labels() {
        assert_eq!(ProviderStatus::Inactive.label(), "Suspendu");
        assert_eq!(ProviderStatus::parse("pending"), Some(ProviderStatus::Pending));
        assert_eq!(ProviderStatus::parse("banned"), None);
    }
}
