//! Subjects that hold roles
//!
//! A subject is whatever roles get attached to, usually a user. It carries an
//! optional in-memory tenant override that lives as long as the subject value
//! (typically one request) and is never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tenant::TenantId;

/// A role-holding entity and its current tenant override.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use roster_access::Subject;
///
/// let mut subject = Subject::new(Uuid::now_v7());
/// assert!(subject.tenant().is_none());
///
/// subject.for_tenant("acme");
/// assert_eq!(subject.tenant().unwrap().as_str(), "acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject ID
    pub id: Uuid,

    /// Tenant override for queries made through this subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tenant: Option<TenantId>,
}

impl Subject {
    /// Creates a subject with no tenant override.
    pub fn new(id: Uuid) -> Self {
        Self { id, tenant: None }
    }

    /// Scope this subject to a tenant.
    ///
    /// Replaces any previous override and returns the subject for chaining.
    pub fn for_tenant(&mut self, tenant: impl Into<TenantId>) -> &mut Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// Remove the tenant override.
    pub fn clear_tenant(&mut self) -> &mut Self {
        self.tenant = None;
        self
    }

    /// Builder form of [`Subject::for_tenant`].
    pub fn with_tenant(mut self, tenant: impl Into<TenantId>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    /// The current tenant override, if any.
    pub fn tenant(&self) -> Option<&TenantId> {
        self.tenant.as_ref()
    }
}

impl From<Uuid> for Subject {
    fn from(id: Uuid) -> Self {
        Self::new(id)
    }
}
