//! Access control configuration
//!
//! Declares the role catalog together with the scope-wide fallback tenant,
//! so an application can bootstrap an [`AccessControl`] from one file.

use roster_rbac::{RegistryConfig, RegistryResult, RoleRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::access::AccessControl;
use crate::store::RoleStore;
use crate::tenant::{FixedTenantScope, TenantId};

/// Bootstrap configuration for [`AccessControl`].
///
/// # Examples
///
/// ```
/// use roster_access::AccessConfig;
///
/// let config: AccessConfig = serde_json::from_str(r#"{
///     "scoped_tenant": "acme",
///     "roles": [{ "key": "admin", "permissions": ["*"] }]
/// }"#).unwrap();
///
/// assert_eq!(config.scoped_tenant.unwrap().as_str(), "acme");
/// assert_eq!(config.registry.roles.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Fallback tenant for subjects without an override
    #[serde(default)]
    pub scoped_tenant: Option<TenantId>,

    /// Role catalog
    #[serde(flatten)]
    pub registry: RegistryConfig,
}

impl AccessConfig {
    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: RoleStore> AccessControl<S> {
    /// Build a resolver from configuration and a role store.
    ///
    /// # Errors
    ///
    /// Any [`RegistryError`](roster_rbac::RegistryError) raised while
    /// building the role catalog.
    pub fn from_config(config: AccessConfig, store: S) -> RegistryResult<Self> {
        let registry = RoleRegistry::from_config(config.registry)?;
        tracing::debug!(
            roles = registry.len(),
            scoped_tenant = ?config.scoped_tenant,
            "Loaded access configuration"
        );

        Ok(AccessControl::new(Arc::new(registry), store)
            .with_scope(FixedTenantScope::from_option(config.scoped_tenant)))
    }
}
