//! Role catalog
//!
//! This module defines role definitions and the registry that maps role keys
//! to them. The registry is built once at bootstrap and then shared read-only
//! (typically behind an `Arc`), so resolution never needs to lock it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::permissions::PermissionSet;

/// A named bundle of permissions.
///
/// Roles are flat: a role never includes another role's permissions.
///
/// # Examples
///
/// ```
/// use roster_rbac::RoleDefinition;
///
/// let role = RoleDefinition::new("editor", ["post:read", "post:update"])
///     .with_name("Editor")
///     .with_description("Can edit existing posts");
///
/// assert_eq!(role.key, "editor");
/// assert!(role.permissions.grants("post:update"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDefinition {
    /// Unique role key used in assignments
    pub key: String,

    /// Human-readable display name
    pub name: String,

    /// Optional description shown to administrators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permissions granted by this role
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl RoleDefinition {
    /// Creates a role definition whose display name defaults to its key.
    ///
    /// # Arguments
    ///
    /// * `key` - The unique role key
    /// * `permissions` - The permission strings granted by the role
    pub fn new<I, T>(key: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            description: None,
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Set the display name for this role.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description for this role.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Catalog of every role the application knows about, keyed by role key.
///
/// Registering a key that already exists replaces the previous definition.
///
/// # Examples
///
/// ```
/// use roster_rbac::RoleRegistry;
///
/// let mut registry = RoleRegistry::new();
/// registry
///     .register("admin", ["*"])
///     .register("editor", ["post:read", "post:update"]);
///
/// assert!(registry.contains("admin"));
/// assert!(registry.lookup("viewer").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    roles: HashMap<String, RoleDefinition>,
}

impl RoleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            roles: HashMap::new(),
        }
    }

    /// Add or overwrite a role with the given permissions.
    pub fn register<I, T>(&mut self, key: impl Into<String>, permissions: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.register_role(RoleDefinition::new(key, permissions));
        self
    }

    /// Add or overwrite a fully described role.
    ///
    /// # Returns
    ///
    /// The definition previously registered under the same key, if any
    pub fn register_role(&mut self, role: RoleDefinition) -> Option<RoleDefinition> {
        tracing::debug!(
            role = %role.key,
            permissions = role.permissions.len(),
            "Registered role"
        );
        self.roles.insert(role.key.clone(), role)
    }

    /// Look up a role definition by key.
    pub fn lookup(&self, key: &str) -> Option<&RoleDefinition> {
        self.roles.get(key)
    }

    /// Check whether a role key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.roles.contains_key(key)
    }

    /// All registered role keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.roles.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over registered definitions in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.values()
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if no roles are registered.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
