//! Tenant identifiers and tenant scoping
//!
//! This module provides the tenant identifier type, the scope-wide fallback
//! tenant provider, and the precedence rules used to decide which tenant a
//! resolution call runs under.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::subject::Subject;

/// Identifier of an isolation scope.
///
/// Tenants may be keyed by slugs, integers, or UUIDs; all of them are
/// normalized to their string form so assignments compare uniformly.
///
/// # Examples
///
/// ```
/// use roster_access::TenantId;
///
/// assert_eq!(TenantId::from("acme").as_str(), "acme");
/// assert_eq!(TenantId::from(42_i64), TenantId::from("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Create a tenant identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&TenantId> for TenantId {
    fn from(id: &TenantId) -> Self {
        id.clone()
    }
}

impl From<Uuid> for TenantId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

macro_rules! tenant_id_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for TenantId {
                fn from(id: $int) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

tenant_id_from_int!(i32, i64, u32, u64, usize);

/// Provides the fallback tenant used when a subject carries no override.
///
/// Typically backed by request-scoped state set by middleware once the
/// current tenant is known.
pub trait TenantScope: Send + Sync {
    /// The tenant every resolution falls back to, if any.
    fn scoped_tenant(&self) -> Option<TenantId>;
}

/// A scope with no fallback tenant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTenantScope;

impl TenantScope for NoTenantScope {
    fn scoped_tenant(&self) -> Option<TenantId> {
        None
    }
}

/// A scope with a fixed fallback tenant.
///
/// # Examples
///
/// ```
/// use roster_access::{FixedTenantScope, TenantScope};
///
/// let scope = FixedTenantScope::new("acme");
/// assert_eq!(scope.scoped_tenant().unwrap().as_str(), "acme");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedTenantScope {
    tenant: Option<TenantId>,
}

impl FixedTenantScope {
    /// Create a scope that always falls back to `tenant`.
    pub fn new(tenant: impl Into<TenantId>) -> Self {
        Self {
            tenant: Some(tenant.into()),
        }
    }

    /// Create a scope from an optional tenant.
    pub fn from_option(tenant: Option<TenantId>) -> Self {
        Self { tenant }
    }
}

impl TenantScope for FixedTenantScope {
    fn scoped_tenant(&self) -> Option<TenantId> {
        self.tenant.clone()
    }
}

/// Tenant precedence for a single resolution call.
///
/// The effective tenant is the first present of:
/// 1. An explicit tenant given at the call site
/// 2. The subject's own tenant override
/// 3. The scope-wide fallback tenant
///
/// `None` means no tenant scoping was requested, not "global roles only".
/// An empty identifier is treated the same as `None`; it does not fall
/// through to the next source.
pub struct TenantContext;

impl TenantContext {
    /// Resolve the tenant a query runs under.
    pub fn resolve(
        explicit: Option<&TenantId>,
        subject: &Subject,
        scope: &dyn TenantScope,
    ) -> Option<TenantId> {
        explicit
            .or_else(|| subject.tenant())
            .cloned()
            .or_else(|| scope.scoped_tenant())
            .filter(|tenant| !tenant.is_empty())
    }

    /// Resolve the tenant an assignment is stored under.
    ///
    /// Assignments ignore the scope-wide fallback: without an explicit tenant
    /// or a subject override, the role is assigned globally.
    pub fn for_assignment(explicit: Option<&TenantId>, subject: &Subject) -> Option<TenantId> {
        explicit
            .or_else(|| subject.tenant())
            .filter(|tenant| !tenant.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_id_conversions() {
        let id = Uuid::now_v7();
        assert_eq!(TenantId::from(id).as_str(), id.to_string());
        assert_eq!(TenantId::from(7_u32).as_str(), "7");
        assert_eq!(TenantId::from(String::from("acme")).to_string(), "acme");
    }

    #[test]
    fn test_resolution_precedence() {
        let scope = FixedTenantScope::new("scoped");
        let subject = Subject::new(Uuid::now_v7());
        let explicit = TenantId::from("explicit");

        assert_eq!(
            TenantContext::resolve(None, &subject, &scope),
            Some(TenantId::from("scoped"))
        );

        let subject = subject.with_tenant("subject");
        assert_eq!(
            TenantContext::resolve(None, &subject, &scope),
            Some(TenantId::from("subject"))
        );
        assert_eq!(
            TenantContext::resolve(Some(&explicit), &subject, &scope),
            Some(explicit.clone())
        );
    }

    #[test]
    fn test_resolution_absent() {
        let subject = Subject::new(Uuid::now_v7());
        assert_eq!(TenantContext::resolve(None, &subject, &NoTenantScope), None);
    }

    #[test]
    fn test_assignment_ignores_scope() {
        let subject = Subject::new(Uuid::now_v7());
        assert_eq!(TenantContext::for_assignment(None, &subject), None);

        let subject = subject.with_tenant(5_i64);
        assert_eq!(
            TenantContext::for_assignment(None, &subject),
            Some(TenantId::from("5"))
        );
    }

    #[test]
    fn test_empty_tenant_means_unscoped() {
        let scope = FixedTenantScope::new("scoped");
        let subject = Subject::new(Uuid::now_v7()).with_tenant("");
        let empty = TenantId::from("");

        assert!(empty.is_empty());
        assert_eq!(TenantContext::resolve(None, &subject, &scope), None);
        assert_eq!(TenantContext::resolve(Some(&empty), &subject, &scope), None);
        assert_eq!(
            TenantContext::resolve(None, &Subject::new(Uuid::now_v7()), &FixedTenantScope::new("")),
            None
        );
        assert_eq!(TenantContext::for_assignment(Some(&empty), &subject), None);
    }

    #[test]
    fn test_fixed_scope_from_option() {
        assert!(FixedTenantScope::from_option(None).scoped_tenant().is_none());
        assert!(FixedTenantScope::default().scoped_tenant().is_none());
    }
}
