//! Role assignment records
//!
//! An assignment states that a subject holds a role, either globally or
//! within one tenant. A subject holds at most one assignment per
//! (role, tenant) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tenant::TenantId;

/// A subject's role, optionally scoped to a tenant.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use roster_access::{RoleAssignment, TenantId};
///
/// let subject_id = Uuid::now_v7();
/// let global = RoleAssignment::new(subject_id, "admin", None);
/// assert!(global.is_global());
///
/// let scoped = RoleAssignment::new(subject_id, "editor", Some(TenantId::from("acme")));
/// assert!(scoped.visible_in(Some(&TenantId::from("acme"))));
/// assert!(!scoped.visible_in(Some(&TenantId::from("globex"))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Unique assignment ID
    pub id: Uuid,

    /// Subject holding the role
    pub subject_id: Uuid,

    /// Role key
    pub role: String,

    /// Tenant the role applies to (`None` = every tenant)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<TenantId>,

    /// When the role was first assigned
    pub created_at: DateTime<Utc>,

    /// When the assignment was last written
    pub updated_at: DateTime<Utc>,
}

impl RoleAssignment {
    /// Creates a new assignment with a UUID v7 ID and current timestamps.
    ///
    /// # Arguments
    ///
    /// * `subject_id` - The subject holding the role
    /// * `role` - The role key
    /// * `tenant` - The tenant, or `None` for a global assignment
    pub fn new(subject_id: Uuid, role: impl Into<String>, tenant: Option<TenantId>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            subject_id,
            role: role.into(),
            tenant,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the role applies in every tenant.
    pub fn is_global(&self) -> bool {
        self.tenant.is_none()
    }

    /// Check if this assignment is the one keyed by `(role, tenant)`.
    pub fn is_keyed_by(&self, role: &str, tenant: Option<&TenantId>) -> bool {
        self.role == role && self.tenant.as_ref() == tenant
    }

    /// Check if the assignment is visible under a resolved tenant.
    ///
    /// With no tenant resolved every assignment is visible. Otherwise only
    /// global assignments and those for that exact tenant are.
    pub fn visible_in(&self, tenant: Option<&TenantId>) -> bool {
        match (tenant, &self.tenant) {
            (None, _) | (Some(_), None) => true,
            (Some(current), Some(own)) => current == own,
        }
    }
}
