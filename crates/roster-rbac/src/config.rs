//! Role catalog configuration
//!
//! Applications usually declare their roles in a configuration file rather
//! than in code. These types describe that file and build a [`RoleRegistry`]
//! from it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{RegistryError, RegistryResult};
use crate::roles::{RoleDefinition, RoleRegistry};

/// Declarative description of the role catalog.
///
/// # Examples
///
/// ```
/// use roster_rbac::RegistryConfig;
///
/// let config = RegistryConfig::default();
/// assert!(config.roles.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Roles to register
    #[serde(default)]
    pub roles: Vec<RoleConfig>,
}

/// A single role entry in a [`RegistryConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    /// Unique role key
    pub key: String,

    /// Display name (defaults to the key)
    #[serde(default)]
    pub name: Option<String>,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Permission strings granted by the role
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl From<RoleConfig> for RoleDefinition {
    fn from(config: RoleConfig) -> Self {
        let mut role = RoleDefinition::new(config.key, config.permissions);
        if let Some(name) = config.name {
            role = role.with_name(name);
        }
        if let Some(description) = config.description {
            role = role.with_description(description);
        }
        role
    }
}

impl RoleRegistry {
    /// Build a registry from configuration.
    ///
    /// Unlike [`RoleRegistry::register`], a configuration may not define the
    /// same key twice, and keys must be non-empty.
    ///
    /// # Errors
    ///
    /// * [`RegistryError::InvalidRoleKey`] for an empty or blank key
    /// * [`RegistryError::DuplicateRole`] for a repeated key
    pub fn from_config(config: RegistryConfig) -> RegistryResult<Self> {
        let mut seen = HashSet::new();
        let mut registry = RoleRegistry::new();

        for role in config.roles {
            if role.key.trim().is_empty() {
                return Err(RegistryError::InvalidRoleKey(role.key));
            }
            if !seen.insert(role.key.clone()) {
                return Err(RegistryError::DuplicateRole(role.key));
            }
            registry.register_role(role.into());
        }

        Ok(registry)
    }

    /// Build a registry from a JSON document shaped like [`RegistryConfig`].
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_rbac::RoleRegistry;
    ///
    /// let registry = RoleRegistry::from_json(r#"{
    ///     "roles": [
    ///         { "key": "admin", "name": "Administrator", "permissions": ["*"] },
    ///         { "key": "editor", "permissions": ["post:read", "*:update"] }
    ///     ]
    /// }"#).unwrap();
    ///
    /// assert_eq!(registry.len(), 2);
    /// assert_eq!(registry.lookup("admin").unwrap().name, "Administrator");
    /// ```
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let registry = RoleRegistry::from_json(
            r#"{"roles": [{"key": "viewer", "description": "Read only", "permissions": ["post:read"]}]}"#,
        )
        .unwrap();

        let viewer = registry.lookup("viewer").unwrap();
        assert_eq!(viewer.name, "viewer");
        assert_eq!(viewer.description.as_deref(), Some("Read only"));
        assert!(viewer.permissions.contains("post:read"));
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let result = RoleRegistry::from_json(
            r#"{"roles": [{"key": "admin"}, {"key": "admin", "permissions": ["*"]}]}"#,
        );
        assert!(matches!(result, Err(RegistryError::DuplicateRole(key)) if key == "admin"));
    }

    #[test]
    fn test_blank_key_rejected() {
        let result = RoleRegistry::from_json(r#"{"roles": [{"key": "  "}]}"#);
        let err = result.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ROLE_KEY");
    }

    #[test]
    fn test_malformed_json() {
        let err = RoleRegistry::from_json("{not json").unwrap_err();
        assert!(matches!(err, RegistryError::Config(_)));
    }

    #[test]
    fn test_empty_config() {
        let registry = RoleRegistry::from_json("{}").unwrap();
        assert!(registry.is_empty());
    }
}
