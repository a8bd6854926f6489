//! # Roster RBAC
//!
//! This crate provides the role catalog and permission matching used by
//! `roster-access` to answer role and permission queries.
//!
//! ## Overview
//!
//! The roster-rbac crate handles:
//! - **Roles**: Named bundles of permission strings, registered once at bootstrap
//! - **Permission Sets**: Deduplicated permission strings with wildcard matching
//! - **Specifiers**: Normalized "which permissions are you asking about" inputs
//! - **Configuration**: Building the catalog from JSON
//!
//! ## Wildcards
//!
//! ```text
//! "*"          - grants every permission
//! "*:create"   - grants any permission ending in ":create"
//! "*:update"   - grants any permission ending in ":update"
//! ```
//!
//! Any other token, including `"*:delete"`, only matches literally.
//!
//! ## Usage
//!
//! ```rust
//! use roster_rbac::{PermissionSpec, RoleRegistry};
//!
//! let mut registry = RoleRegistry::new();
//! registry
//!     .register("admin", ["*"])
//!     .register("author", ["post:read", "*:create"]);
//!
//! let author = registry.lookup("author").unwrap();
//! assert!(author.permissions.grants("post:create"));
//! assert!(author.permissions.grants_any(&PermissionSpec::from(["post:delete", "post:read"])));
//! ```

pub mod config;
pub mod error;
pub mod permissions;
pub mod roles;
pub mod value;

// Re-export main types for convenience
pub use config::{RegistryConfig, RoleConfig};
pub use error::{RegistryError, RegistryResult};
pub use permissions::{PermissionSet, PermissionSpec, SUFFIX_WILDCARDS, UNIVERSAL_WILDCARD};
pub use roles::{RoleDefinition, RoleRegistry};
pub use value::HasStringValue;
