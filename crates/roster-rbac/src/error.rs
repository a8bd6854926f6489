//! Error types for building the role catalog
//!
//! Registry errors only arise while the catalog is being populated at
//! bootstrap. Lookups against a built registry never fail.

use thiserror::Error;

/// Role catalog error types.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The same role key appears more than once in a configuration
    #[error("Role {0} is defined more than once")]
    DuplicateRole(String),

    /// Role keys must be non-empty
    #[error("Invalid role key: {0:?}")]
    InvalidRoleKey(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for role catalog operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateRole(_) => "DUPLICATE_ROLE",
            RegistryError::InvalidRoleKey(_) => "INVALID_ROLE_KEY",
            RegistryError::Config(_) => "CONFIG_ERROR",
        }
    }
}
