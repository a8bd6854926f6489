//! # String-backed values
//!
//! Roles and permissions are plain strings at resolution time, but callers
//! usually model them as enums. [`HasStringValue`] is the bridge: any type that
//! can expose its underlying string can be used wherever a role or permission
//! specifier is accepted.

/// A value backed by a string identifier.
///
/// Implement this for application enums that name roles or permissions.
///
/// # Example
///
/// ```
/// use roster_rbac::HasStringValue;
///
/// #[derive(Clone, Copy)]
/// enum AppRole {
///     Admin,
///     Editor,
/// }
///
/// impl HasStringValue for AppRole {
///     fn string_value(&self) -> &str {
///         match self {
///             AppRole::Admin => "admin",
///             AppRole::Editor => "editor",
///         }
///     }
/// }
///
/// assert_eq!(AppRole::Editor.string_value(), "editor");
/// ```
pub trait HasStringValue {
    /// The underlying string identifier.
    fn string_value(&self) -> &str;
}

impl HasStringValue for str {
    fn string_value(&self) -> &str {
        self
    }
}

impl HasStringValue for String {
    fn string_value(&self) -> &str {
        self.as_str()
    }
}

impl<T: HasStringValue + ?Sized> HasStringValue for &T {
    fn string_value(&self) -> &str {
        (**self).string_value()
    }
}
