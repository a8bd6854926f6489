//! Error types for role assignment and resolution
//!
//! Queries are total over their inputs, so the only domain error is an
//! attempt to assign a role the catalog does not know. Everything else is a
//! storage failure passed through from the [`RoleStore`](crate::RoleStore).

use thiserror::Error;

use crate::store::StoreError;

/// Access control error types.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The role key is not present in the role registry
    #[error("Role {0} has not been registered")]
    RoleNotRegistered(String),

    /// The role store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for access control operations.
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Check if this error should be logged at error level.
    ///
    /// Assigning an unknown role is a caller mistake, not a server fault.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AccessError::Store(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AccessError::RoleNotRegistered(_) => 422,
            AccessError::Store(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::RoleNotRegistered(_) => "ROLE_NOT_REGISTERED",
            AccessError::Store(_) => "STORE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_not_registered_message() {
        let err = AccessError::RoleNotRegistered("ghost".to_string());
        assert_eq!(err.to_string(), "Role ghost has not been registered");
        assert_eq!(err.error_code(), "ROLE_NOT_REGISTERED");
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_store_error_passes_through() {
        let err: AccessError = StoreError::Connection("refused".to_string()).into();
        assert_eq!(err.to_string(), "Connection error: refused");
        assert_eq!(err.status_code(), 500);
        assert!(err.is_server_error());
    }
}
