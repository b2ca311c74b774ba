//! Who is performing an operation

use serde::{Deserialize, Serialize};

/// The role-bound identity behind a dashboard action.
///
/// Authentication is not done here; the embedding shell decides who the
/// current user is and passes the matching actor along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "id", rename_all = "lowercase")]
pub enum Actor {
    Client(String),
    Provider(String),
    Admin,
}

impl Actor {
    pub fn client(id: impl Into<String>) -> Self {
        Self::Client(id.into())
    }

    pub fn provider(id: impl Into<String>) -> Self {
        Self::Provider(id.into())
    }

    pub fn role(&self) -> &'static str {
        match self {
            Self::Client(_) => "client",
            Self::Provider(_) => "provider",
            Self::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// True for the admin, or for the provider with the given id.
    pub fn acts_for_provider(&self, provider_id: &str) -> bool {
        match self {
            Self::Admin => true,
            Self::Provider(id) => id == provider_id,
            Self::Client(_) => false,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client(id) | Self::Provider(id) => write!(f, "{}:{}", self.role(), id),
            Self::Admin => write!(f, "admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_acts_for_every_provider() {
        assert!(Actor::Admin.acts_for_provider("prov-1"));
        assert!(Actor::provider("prov-1").acts_for_provider("prov-1"));
        assert!(!Actor::provider("prov-2").acts_for_provider("prov-1"));
        assert!(!Actor::client("prov-1").acts_for_provider("prov-1"));
    }

    #[test]
    fn serializes_with_role_tag() {
        let json = serde_json::to_value(Actor::provider("prov-1")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "provider", "id": "prov-1"}));
        let json = serde_json::to_value(Actor::Admin).unwrap();
        assert_eq!(json, serde_json::json!({"role": "admin"}));
    }
}
