//! Role specifiers
//!
//! Callers ask about roles in several shapes: one key, a list of keys,
//! string-backed enum values, or assignment records they already hold.
//! [`RoleSpec`] captures those shapes and normalizes them to one set of role
//! keys before any matching runs.
//!
//! Keys and assignment records never mix in one specifier.

use roster_rbac::HasStringValue;
use std::collections::HashSet;

use crate::assignment::RoleAssignment;

/// The roles a query is about.
///
/// # Examples
///
/// ```
/// use roster_access::RoleSpec;
///
/// let spec = RoleSpec::from(["admin", "", "editor", "admin"]);
/// let keys = spec.role_keys();
/// assert_eq!(keys.len(), 2);
/// assert!(keys.contains("editor"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSpec {
    /// Plain role keys
    Keys(Vec<String>),

    /// Existing assignment records; only their role keys are used
    Assignments(Vec<RoleAssignment>),
}

impl RoleSpec {
    /// Build a specifier from string-backed values such as role enums.
    pub fn values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: HasStringValue,
    {
        RoleSpec::Keys(
            values
                .into_iter()
                .map(|value| value.string_value().to_string())
                .collect(),
        )
    }

    /// Build a specifier from a single string-backed value.
    pub fn value<T: HasStringValue>(value: T) -> Self {
        Self::values([value])
    }

    /// The distinct, non-empty role keys requested.
    pub fn role_keys(&self) -> HashSet<&str> {
        match self {
            RoleSpec::Keys(keys) => keys
                .iter()
                .map(String::as_str)
                .filter(|key| !key.is_empty())
                .collect(),
            RoleSpec::Assignments(assignments) => assignments
                .iter()
                .map(|assignment| assignment.role.as_str())
                .filter(|key| !key.is_empty())
                .collect(),
        }
    }

    /// Check if the specifier requests no roles at all.
    pub fn is_empty(&self) -> bool {
        self.role_keys().is_empty()
    }
}

impl Default for RoleSpec {
    fn default() -> Self {
        RoleSpec::Keys(Vec::new())
    }
}

impl From<&str> for RoleSpec {
    fn from(key: &str) -> Self {
        RoleSpec::Keys(vec![key.to_string()])
    }
}

impl From<String> for RoleSpec {
    fn from(key: String) -> Self {
        RoleSpec::Keys(vec![key])
    }
}

impl From<&String> for RoleSpec {
    fn from(key: &String) -> Self {
        RoleSpec::Keys(vec![key.clone()])
    }
}

impl From<Vec<&str>> for RoleSpec {
    fn from(keys: Vec<&str>) -> Self {
        Self::values(keys)
    }
}

impl From<Vec<String>> for RoleSpec {
    fn from(keys: Vec<String>) -> Self {
        RoleSpec::Keys(keys)
    }
}

impl From<&[&str]> for RoleSpec {
    fn from(keys: &[&str]) -> Self {
        Self::values(keys)
    }
}

impl From<&[String]> for RoleSpec {
    fn from(keys: &[String]) -> Self {
        RoleSpec::Keys(keys.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for RoleSpec {
    fn from(keys: [&str; N]) -> Self {
        Self::values(keys)
    }
}

impl From<RoleAssignment> for RoleSpec {
    fn from(assignment: RoleAssignment) -> Self {
        RoleSpec::Assignments(vec![assignment])
    }
}

impl From<&RoleAssignment> for RoleSpec {
    fn from(assignment: &RoleAssignment) -> Self {
        RoleSpec::Assignments(vec![assignment.clone()])
    }
}

impl From<Vec<RoleAssignment>> for RoleSpec {
    fn from(assignments: Vec<RoleAssignment>) -> Self {
        RoleSpec::Assignments(assignments)
    }
}

impl From<&[RoleAssignment]> for RoleSpec {
    fn from(assignments: &[RoleAssignment]) -> Self {
        RoleSpec::Assignments(assignments.to_vec())
    }
}

impl From<&Vec<RoleAssignment>> for RoleSpec {
    fn from(assignments: &Vec<RoleAssignment>) -> Self {
        RoleSpec::Assignments(assignments.clone())
    }
}
