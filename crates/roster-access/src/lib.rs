//! # Roster Access
//!
//! This crate attaches roles to subjects in a multi-tenant application and
//! answers, at query time, whether a subject holds a role or permission.
//!
//! ## Overview
//!
//! The roster-access crate handles:
//! - **Subjects**: Role holders with an optional per-request tenant override
//! - **Assignments**: A subject's role, global or scoped to one tenant
//! - **Tenants**: Identifier type, fallback scope, and precedence rules
//! - **Storage**: The `RoleStore` seam and an in-memory implementation
//! - **Resolution**: Role filtering and permission evaluation
//!
//! ## Architecture
//!
//! ```text
//! caller
//!   └─ AccessControl
//!        ├─ RoleStore        (list / upsert assignments)
//!        ├─ TenantScope      (fallback tenant)
//!        └─ RoleRegistry     (role key → permissions, from roster-rbac)
//! ```
//!
//! The tenant a query runs under is the subject's override if set, else the
//! scope's fallback tenant. With a tenant, only global assignments and
//! assignments for that tenant are considered; without one, all are.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use roster_access::{AccessControl, MemoryRoleStore, Subject};
//! use roster_rbac::RoleRegistry;
//!
//! # async fn run() -> Result<(), roster_access::AccessError> {
//! let mut registry = RoleRegistry::new();
//! registry.register("billing", ["invoice:read", "*:create"]);
//!
//! let access = AccessControl::new(Arc::new(registry), MemoryRoleStore::new());
//!
//! let mut subject = Subject::new(Uuid::now_v7());
//! access.assign_role(&subject, "billing", Some("acme".into())).await?;
//!
//! subject.for_tenant("acme");
//! assert!(access.has_permission(&subject, "invoice:create").await?);
//!
//! subject.for_tenant("globex");
//! assert!(!access.has_permission(&subject, "invoice:create").await?);
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod assignment;
pub mod config;
pub mod error;
pub mod specifier;
pub mod store;
pub mod subject;
pub mod tenant;

// Re-export main types for convenience
pub use access::AccessControl;
pub use assignment::RoleAssignment;
pub use config::AccessConfig;
pub use error::{AccessError, AccessResult};
pub use specifier::RoleSpec;
pub use store::{MemoryRoleStore, RoleStore, StoreError, StoreResult};
pub use subject::Subject;
pub use tenant::{FixedTenantScope, NoTenantScope, TenantContext, TenantId, TenantScope};
