use crate::database::DbError;
use app_state::ConfigurationError;
use thiserror::Error;
use tracing::{error, warn};

/// Failures a caller of the access layer can see.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl AccessError {
    /// Configuration problems need an operator; database errors may go away.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    pub fn log(&self) {
        match self {
            Self::Configuration(e) => error!("Gallery configuration is inconsistent: {}", e),
            Self::Database(e) => warn!("Database query failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_not_retriable() {
        let error: AccessError = ConfigurationError::MissingKey("single_library_owner".into()).into();

        assert!(!error.is_retriable());
        assert_eq!(
            error.to_string(),
            "configuration error: required config key `single_library_owner` is missing and has no default"
        );
    }

    #[test]
    fn test_database_errors_are_retriable() {
        let error: AccessError = DbError::from(sqlx::Error::PoolTimedOut).into();

        assert!(error.is_retriable());
    }
}
