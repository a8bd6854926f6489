//! # Permissions
//!
//! Flat permission sets and the wildcard rules used to answer permission
//! queries. A permission is an opaque string token such as `"invoice:create"`;
//! the only structure the matcher understands is the universal wildcard and
//! the `*:create` / `*:update` suffix wildcards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::value::HasStringValue;

/// Grants every permission.
pub const UNIVERSAL_WILDCARD: &str = "*";

/// Suffix wildcards as `(requested suffix, granting token)` pairs.
///
/// Only creation and update actions have suffix wildcards.
pub const SUFFIX_WILDCARDS: [(&str, &str); 2] = [(":create", "*:create"), (":update", "*:update")];

/// A deduplicated set of permission strings, usually the union of the
/// permissions of every role a subject holds.
///
/// # Example
///
/// ```
/// use roster_rbac::PermissionSet;
///
/// let set = PermissionSet::from_strings(&["invoice:read", "*:create"]);
///
/// assert!(set.grants("invoice:read"));
/// assert!(set.grants("invoice:create"));
/// assert!(!set.grants("invoice:delete"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionSet {
    permissions: HashSet<String>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Create from a list of permission strings. Empty strings are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_rbac::PermissionSet;
    ///
    /// let set = PermissionSet::from_strings(&["post:read", "post:read", "post:update"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_strings(perms: &[&str]) -> Self {
        perms.iter().copied().collect()
    }

    /// Add a permission to the set.
    ///
    /// Returns `true` if the permission was not already present.
    pub fn add(&mut self, permission: impl Into<String>) -> bool {
        let permission = permission.into();
        if permission.is_empty() {
            return false;
        }
        self.permissions.insert(permission)
    }

    /// Add multiple permissions to the set.
    pub fn add_all<I, T>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for perm in permissions {
            self.add(perm);
        }
    }

    /// Remove a permission from the set.
    ///
    /// # Returns
    ///
    /// `true` if the permission was present, `false` otherwise
    pub fn remove(&mut self, permission: &str) -> bool {
        self.permissions.remove(permission)
    }

    /// Check whether the set literally contains `permission`, without
    /// applying any wildcard rule.
    pub fn contains(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// Check whether the set grants a single permission.
    ///
    /// A permission is granted if any of these hold:
    /// 1. The permission is literally present
    /// 2. The set contains the universal wildcard `*`
    /// 3. The permission ends in `:create` and the set contains `*:create`
    /// 4. The permission ends in `:update` and the set contains `*:update`
    pub fn grants(&self, permission: &str) -> bool {
        if self.permissions.contains(permission) || self.permissions.contains(UNIVERSAL_WILDCARD) {
            return true;
        }

        SUFFIX_WILDCARDS.iter().any(|(suffix, token)| {
            permission.ends_with(suffix) && self.permissions.contains(*token)
        })
    }

    /// Check whether the set grants at least one of the requested permissions.
    ///
    /// An empty request grants nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_rbac::{PermissionSet, PermissionSpec};
    ///
    /// let set = PermissionSet::from_strings(&["report:export"]);
    /// assert!(set.grants_any(&PermissionSpec::from(["report:delete", "report:export"])));
    /// assert!(!set.grants_any(&PermissionSpec::default()));
    /// ```
    pub fn grants_any(&self, requested: &PermissionSpec) -> bool {
        requested.iter().any(|permission| {
            let granted = self.grants(permission);
            tracing::trace!(permission = %permission, granted, "Evaluated permission");
            granted
        })
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        for perm in &other.permissions {
            self.permissions.insert(perm.clone());
        }
    }

    /// Iterate over the permissions in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    /// Consume the set into an unordered list of permission strings.
    pub fn into_vec(self) -> Vec<String> {
        self.permissions.into_iter().collect()
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Clear all permissions.
    pub fn clear(&mut self) {
        self.permissions.clear();
    }
}

impl<T: Into<String>> FromIterator<T> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = PermissionSet::new();
        set.add_all(iter);
        set
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(permissions: Vec<String>) -> Self {
        permissions.into_iter().collect()
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(set: PermissionSet) -> Self {
        set.into_vec()
    }
}

impl<T: Into<String>> Extend<T> for PermissionSet {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

/// The permissions a caller is asking about.
///
/// Built from a single permission, a list of permissions, or string-backed
/// enum values. Empty entries are dropped and duplicates collapsed, keeping
/// the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSpec {
    permissions: Vec<String>,
}

impl PermissionSpec {
    /// Build a specifier from any list of string-backed values.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_rbac::PermissionSpec;
    ///
    /// let spec = PermissionSpec::values(["post:read", "", "post:read"]);
    /// assert_eq!(spec.len(), 1);
    /// ```
    pub fn values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: HasStringValue,
    {
        let mut permissions: Vec<String> = Vec::new();
        for value in values {
            let value = value.string_value();
            if !value.is_empty() && !permissions.iter().any(|p| p == value) {
                permissions.push(value.to_string());
            }
        }
        Self { permissions }
    }

    /// Build a specifier from a single string-backed value.
    pub fn value<T: HasStringValue>(value: T) -> Self {
        Self::values([value])
    }

    /// Iterate over the requested permissions.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    /// Number of distinct non-empty permissions requested.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl From<&str> for PermissionSpec {
    fn from(value: &str) -> Self {
        Self::value(value)
    }
}

impl From<String> for PermissionSpec {
    fn from(value: String) -> Self {
        Self::value(value)
    }
}

impl From<&String> for PermissionSpec {
    fn from(value: &String) -> Self {
        Self::value(value)
    }
}

impl From<Vec<&str>> for PermissionSpec {
    fn from(values: Vec<&str>) -> Self {
        Self::values(values)
    }
}

impl From<Vec<String>> for PermissionSpec {
    fn from(values: Vec<String>) -> Self {
        Self::values(values)
    }
}

impl From<&[&str]> for PermissionSpec {
    fn from(values: &[&str]) -> Self {
        Self::values(values)
    }
}

impl From<&[String]> for PermissionSpec {
    fn from(values: &[String]) -> Self {
        Self::values(values)
    }
}

impl<const N: usize> From<[&str; N]> for PermissionSpec {
    fn from(values: [&str; N]) -> Self {
        Self::values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        let set = PermissionSet::from_strings(&["invoice:read"]);
        assert!(set.grants("invoice:read"));
        assert!(!set.grants("invoice:readx"));
        assert!(!set.grants("invoice"));
    }

    #[test]
    fn test_universal_wildcard() {
        let set = PermissionSet::from_strings(&["*"]);
        assert!(set.grants("anything:whatever"));
        assert!(set.grants("invoice:delete"));
        assert!(set.grants("no-colon-at-all"));
    }

    #[test]
    fn test_create_suffix_wildcard() {
        let set = PermissionSet::from_strings(&["*:create"]);
        assert!(set.grants("invoice:create"));
        assert!(set.grants("team:member:create"));
        assert!(!set.grants("invoice:update"));
        assert!(!set.grants("invoice:delete"));
        assert!(!set.grants("invoicecreate"));
    }

    #[test]
    fn test_update_suffix_wildcard() {
        let set = PermissionSet::from_strings(&["*:update"]);
        assert!(set.grants("post:update"));
        assert!(!set.grants("post:create"));
    }

    #[test]
    fn test_other_suffix_wildcards_only_match_literally() {
        let set = PermissionSet::from_strings(&["*:delete"]);
        assert!(!set.grants("invoice:delete"));
        assert!(set.grants("*:delete"));
    }

    #[test]
    fn test_grants_any_is_or() {
        let set = PermissionSet::from_strings(&["a"]);
        assert!(set.grants_any(&PermissionSpec::from(["a", "b"])));
        assert!(set.grants_any(&PermissionSpec::from(["b", "a"])));
        assert!(!set.grants_any(&PermissionSpec::from(["b", "c"])));
    }

    #[test]
    fn test_empty_request_grants_nothing() {
        let set = PermissionSet::from_strings(&["*"]);
        assert!(!set.grants_any(&PermissionSpec::default()));
        assert!(!set.grants_any(&PermissionSpec::from("")));
    }

    #[test]
    fn test_set_deduplicates_and_skips_empty() {
        let mut set = PermissionSet::new();
        assert!(set.add("post:read"));
        assert!(!set.add("post:read"));
        assert!(!set.add(""));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_merge() {
        let mut set1 = PermissionSet::from_strings(&["post:read"]);
        let set2 = PermissionSet::from_strings(&["post:read", "post:create"]);

        set1.merge(&set2);
        assert_eq!(set1.len(), 2);
        assert!(set1.contains("post:create"));
    }

    #[test]
    fn test_remove() {
        let mut set = PermissionSet::from_strings(&["post:read"]);
        assert!(set.remove("post:read"));
        assert!(!set.remove("post:read"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_spec_normalization() {
        let spec = PermissionSpec::from(vec!["b", "", "a", "b"]);
        assert_eq!(spec.iter().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_serde_as_list() {
        let set = PermissionSet::from_strings(&["post:read"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["post:read"]"#);

        let back: PermissionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_deserialize_drops_empty_entries() {
        let set: PermissionSet = serde_json::from_str(r#"["", "post:read", "post:read"]"#).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("post:read"));
        assert!(!set.contains(""));
    }
}
