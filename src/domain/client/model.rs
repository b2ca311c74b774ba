//! Client domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered client. Credentials live with the identity service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub district: String,
    pub registered_at: DateTime<Utc>,
}

impl Client {
    pub fn new_id() -> String {
        format!("client-{}", uuid::Uuid::new_v4())
    }

    /// "First Last", as shown on provider and admin dashboards
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_first_then_last() {
        let client = Client {
            id: "client-1".into(),
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            phone: "+237 6 00 00 00 00".into(),
            email: "jean@example.cm".into(),
            city: "Douala".into(),
            district: "Akwa".into(),
            registered_at: Utc::now(),
        };
        assert_eq!(client.display_name(), "Jean Dupont");
    }
}
