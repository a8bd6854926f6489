//! Role resolution and permission evaluation
//!
//! [`AccessControl`] ties the role catalog, a role store, and the tenant
//! scope together and answers every role and permission query for a subject.
//!
//! Every query goes through the same filter: the subject's assignments are
//! first narrowed to those visible in the current tenant, then to the
//! requested role keys. An assignment for another tenant never satisfies a
//! check, whatever its role.

use roster_rbac::{PermissionSet, PermissionSpec, RoleDefinition, RoleRegistry};
use std::fmt;
use std::sync::Arc;

use crate::assignment::RoleAssignment;
use crate::error::{AccessError, AccessResult};
use crate::specifier::RoleSpec;
use crate::store::RoleStore;
use crate::subject::Subject;
use crate::tenant::{NoTenantScope, TenantContext, TenantId, TenantScope};

/// Role and permission resolver for subjects.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use uuid::Uuid;
/// use roster_access::{AccessControl, MemoryRoleStore, Subject};
/// use roster_rbac::RoleRegistry;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut registry = RoleRegistry::new();
/// registry.register("editor", ["post:read", "*:update"]);
///
/// let access = AccessControl::new(Arc::new(registry), MemoryRoleStore::new());
/// let subject = Subject::new(Uuid::now_v7());
///
/// access.assign_role(&subject, "editor", None).await.unwrap();
///
/// assert!(access.has_role(&subject, "editor").await.unwrap());
/// assert!(access.has_permission(&subject, "post:update").await.unwrap());
/// assert!(!access.has_permission(&subject, "post:delete").await.unwrap());
/// # }
/// ```
pub struct AccessControl<S> {
    registry: Arc<RoleRegistry>,
    store: S,
    scope: Arc<dyn TenantScope>,
}

impl<S> fmt::Debug for AccessControl<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessControl")
            .field("roles", &self.registry.len())
            .field("scoped_tenant", &self.scope.scoped_tenant())
            .finish()
    }
}

impl<S: RoleStore> AccessControl<S> {
    /// Create a resolver with no scope-wide fallback tenant.
    pub fn new(registry: Arc<RoleRegistry>, store: S) -> Self {
        Self {
            registry,
            store,
            scope: Arc::new(NoTenantScope),
        }
    }

    /// Use `scope` as the fallback tenant provider.
    pub fn with_scope(self, scope: impl TenantScope + 'static) -> Self {
        self.with_shared_scope(Arc::new(scope))
    }

    /// Use a shared fallback tenant provider.
    pub fn with_shared_scope(mut self, scope: Arc<dyn TenantScope>) -> Self {
        self.scope = scope;
        self
    }

    /// The role catalog.
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// The underlying role store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The tenant queries for `subject` currently run under.
    pub fn current_tenant(&self, subject: &Subject) -> Option<TenantId> {
        TenantContext::resolve(None, subject, self.scope.as_ref())
    }

    /// Assign a registered role to a subject.
    ///
    /// The assignment is stored under `tenant` if given, else under the
    /// subject's tenant override, else globally. Assigning the same role
    /// under the same tenant twice keeps a single assignment.
    ///
    /// # Errors
    ///
    /// * [`AccessError::RoleNotRegistered`] if `role` is not in the registry;
    ///   nothing is stored in that case
    /// * [`AccessError::Store`] if the store fails
    pub async fn assign_role<'a>(
        &self,
        subject: &'a Subject,
        role: &str,
        tenant: Option<TenantId>,
    ) -> AccessResult<&'a Subject> {
        if !self.registry.contains(role) {
            tracing::warn!(subject = %subject.id, role = %role, "Refused to assign unregistered role");
            return Err(AccessError::RoleNotRegistered(role.to_string()));
        }

        let tenant = TenantContext::for_assignment(tenant.as_ref(), subject);
        let assignment = self.store.upsert_assignment(subject.id, role, tenant).await?;

        tracing::info!(
            subject = %subject.id,
            role = %assignment.role,
            tenant = ?assignment.tenant,
            assignment_id = %assignment.id,
            "Assigned role"
        );

        Ok(subject)
    }

    /// Every assignment the subject holds, regardless of tenant.
    pub async fn roles(&self, subject: &Subject) -> AccessResult<Vec<RoleAssignment>> {
        Ok(self.store.list_assignments(subject.id).await?)
    }

    /// The definition behind an assignment, if its role is still registered.
    pub fn find_role(&self, assignment: &RoleAssignment) -> Option<&RoleDefinition> {
        self.registry.lookup(&assignment.role)
    }

    /// The subject's assignments matching `roles` that are visible in the
    /// current tenant, in storage order.
    ///
    /// An empty specifier matches nothing.
    pub async fn filter_roles(
        &self,
        subject: &Subject,
        roles: impl Into<RoleSpec>,
    ) -> AccessResult<Vec<RoleAssignment>> {
        self.filter_roles_in(subject, roles, None).await
    }

    /// Like [`filter_roles`](Self::filter_roles), with `tenant` taking
    /// precedence over the subject's override and the scope fallback.
    pub async fn filter_roles_in(
        &self,
        subject: &Subject,
        roles: impl Into<RoleSpec>,
        tenant: Option<&TenantId>,
    ) -> AccessResult<Vec<RoleAssignment>> {
        let roles = roles.into();
        let requested = roles.role_keys();
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let mut matched = self.visible_assignments(subject, tenant).await?;
        matched.retain(|assignment| requested.contains(assignment.role.as_str()));

        tracing::debug!(
            subject = %subject.id,
            requested = requested.len(),
            matched = matched.len(),
            "Matched roles"
        );

        Ok(matched)
    }

    /// Check if the subject holds any of `roles` in the current tenant.
    pub async fn has_role(&self, subject: &Subject, roles: impl Into<RoleSpec>) -> AccessResult<bool> {
        self.has_role_in(subject, roles, None).await
    }

    /// Check if the subject holds any of `roles` in `tenant`, or in the
    /// current tenant when `tenant` is `None`.
    pub async fn has_role_in(
        &self,
        subject: &Subject,
        roles: impl Into<RoleSpec>,
        tenant: Option<&TenantId>,
    ) -> AccessResult<bool> {
        Ok(!self.filter_roles_in(subject, roles, tenant).await?.is_empty())
    }

    /// The deduplicated permissions granted by the subject's matching roles,
    /// in no particular order.
    ///
    /// Roles missing from the registry contribute nothing.
    pub async fn role_permissions(
        &self,
        subject: &Subject,
        roles: impl Into<RoleSpec>,
    ) -> AccessResult<Vec<String>> {
        Ok(self.role_permission_set(subject, roles).await?.into_vec())
    }

    /// Check if the subject's matching roles grant at least one of
    /// `permissions`.
    ///
    /// Callers needing every permission must check them one at a time.
    pub async fn has_role_permission(
        &self,
        subject: &Subject,
        roles: impl Into<RoleSpec>,
        permissions: impl Into<PermissionSpec>,
    ) -> AccessResult<bool> {
        let granted = self.role_permission_set(subject, roles).await?;
        Ok(granted.grants_any(&permissions.into()))
    }

    /// Check if any of the subject's roles grant at least one of
    /// `permissions`.
    pub async fn has_permission(
        &self,
        subject: &Subject,
        permissions: impl Into<PermissionSpec>,
    ) -> AccessResult<bool> {
        let granted = self.all_permission_set(subject).await?;
        Ok(granted.grants_any(&permissions.into()))
    }

    /// The deduplicated permissions granted by all of the subject's roles in
    /// the current tenant.
    pub async fn permissions(&self, subject: &Subject) -> AccessResult<Vec<String>> {
        Ok(self.all_permission_set(subject).await?.into_vec())
    }

    async fn role_permission_set(
        &self,
        subject: &Subject,
        roles: impl Into<RoleSpec>,
    ) -> AccessResult<PermissionSet> {
        let matched = self.filter_roles(subject, roles).await?;
        Ok(self.collect_permissions(&matched))
    }

    async fn all_permission_set(&self, subject: &Subject) -> AccessResult<PermissionSet> {
        let visible = self.visible_assignments(subject, None).await?;
        Ok(self.collect_permissions(&visible))
    }

    /// The subject's assignments visible in the resolved tenant.
    ///
    /// Tenant visibility must be applied before any role key match.
    async fn visible_assignments(
        &self,
        subject: &Subject,
        explicit: Option<&TenantId>,
    ) -> AccessResult<Vec<RoleAssignment>> {
        let tenant = TenantContext::resolve(explicit, subject, self.scope.as_ref());
        let assignments = self.store.list_assignments(subject.id).await?;
        let held = assignments.len();

        let visible: Vec<RoleAssignment> = assignments
            .into_iter()
            .filter(|assignment| assignment.visible_in(tenant.as_ref()))
            .collect();

        tracing::debug!(
            subject = %subject.id,
            tenant = ?tenant,
            held,
            visible = visible.len(),
            "Resolved tenant roles"
        );

        Ok(visible)
    }

    fn collect_permissions(&self, assignments: &[RoleAssignment]) -> PermissionSet {
        let mut permissions = PermissionSet::new();
        for assignment in assignments {
            match self.find_role(assignment) {
                Some(role) => permissions.merge(&role.permissions),
                None => tracing::debug!(role = %assignment.role, "Assigned role is not registered"),
            }
        }
        permissions
    }
}
