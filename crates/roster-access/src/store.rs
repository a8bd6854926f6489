//! Role assignment storage
//!
//! The resolver never decides how assignments are persisted. It talks to a
//! [`RoleStore`], which an application backs with its own database. An
//! in-memory implementation is provided for single-process use and testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assignment::RoleAssignment;
use crate::tenant::TenantId;

/// Role store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend connection failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query or write failure
    #[error("Query error: {0}")]
    Query(String),

    /// Record could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for role store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence seam for role assignments.
///
/// Implementations own retry, timeout, and pooling policy; failures are
/// passed through to callers unchanged.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// All assignments held by a subject, in storage order.
    async fn list_assignments(&self, subject_id: Uuid) -> StoreResult<Vec<RoleAssignment>>;

    /// Insert the `(subject, role, tenant)` assignment if it does not exist.
    ///
    /// An existing assignment is returned unchanged.
    async fn upsert_assignment(
        &self,
        subject_id: Uuid,
        role: &str,
        tenant: Option<TenantId>,
    ) -> StoreResult<RoleAssignment>;
}

#[async_trait]
impl<T: RoleStore + ?Sized> RoleStore for Arc<T> {
    async fn list_assignments(&self, subject_id: Uuid) -> StoreResult<Vec<RoleAssignment>> {
        (**self).list_assignments(subject_id).await
    }

    async fn upsert_assignment(
        &self,
        subject_id: Uuid,
        role: &str,
        tenant: Option<TenantId>,
    ) -> StoreResult<RoleAssignment> {
        (**self).upsert_assignment(subject_id, role, tenant).await
    }
}

/// In-memory role store.
///
/// Assignments are kept per subject in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoleStore {
    assignments: Arc<RwLock<HashMap<Uuid, Vec<RoleAssignment>>>>,
}

impl MemoryRoleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of assignments across all subjects.
    pub async fn len(&self) -> usize {
        self.assignments.read().await.values().map(Vec::len).sum()
    }

    /// Check if no assignments are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn list_assignments(&self, subject_id: Uuid) -> StoreResult<Vec<RoleAssignment>> {
        let assignments = self.assignments.read().await;
        Ok(assignments.get(&subject_id).cloned().unwrap_or_default())
    }

    async fn upsert_assignment(
        &self,
        subject_id: Uuid,
        role: &str,
        tenant: Option<TenantId>,
    ) -> StoreResult<RoleAssignment> {
        let mut assignments = self.assignments.write().await;
        let held = assignments.entry(subject_id).or_default();

        if let Some(existing) = held.iter().find(|a| a.is_keyed_by(role, tenant.as_ref())) {
            return Ok(existing.clone());
        }

        let assignment = RoleAssignment::new(subject_id, role, tenant);
        held.push(assignment.clone());
        Ok(assignment)
    }
}
