//! Namespace-qualified type names.

use std::fmt;

/// A namespace-qualified type name such as `Windows.Foundation.IAsyncAction`.
///
/// Generic definitions keep their arity suffix in `name`
/// (e.g. ``IVector`1``).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeName {
    namespace: String,
    name: String,
}

impl TypeName {
    /// Create a name from its namespace and simple name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split a full dotted name at its last `.`.
    ///
    /// A name without any `.` has an empty namespace.
    pub fn parse(full_name: &str) -> Self {
        match full_name.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", full_name),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check both parts at once.
    #[inline]
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }

    /// `System.Object`, the implicit root of every class hierarchy.
    #[inline]
    pub fn is_system_object(&self) -> bool {
        self.is("System", "Object")
    }

    /// `System.Guid`, a value type with no definition in component metadata.
    #[inline]
    pub fn is_system_guid(&self) -> bool {
        self.is("System", "Guid")
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests;
