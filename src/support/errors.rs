use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid transition: cannot {action} {entity} {id} while {from}")]
    InvalidTransition {
        entity: &'static str,
        id: String,
        from: &'static str,
        action: &'static str,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Provider {0} is not accepting reservations")]
    ProviderUnavailable(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Stable kind name for UI shells that map errors to messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidTransition { .. } => "invalid_transition",
            Self::Validation(_) => "validation",
            Self::Forbidden(_) => "forbidden",
            Self::ProviderUnavailable(_) => "provider_unavailable",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity() {
        let err = DomainError::not_found("Reservation", "res-1");
        assert_eq!(err.to_string(), "Not found: Reservation with id=res-1");
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn invalid_transition_message() {
        let err = DomainError::InvalidTransition {
            entity: "Reservation",
            id: "res-1".into(),
            from: "accepted",
            action: "accept",
        };
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot accept Reservation res-1 while accepted"
        );
    }
}
