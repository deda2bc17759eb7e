//! Custom attributes attached to metadata records.

use crate::TypeName;

/// Namespace of every attribute the projection understands.
pub const METADATA_NAMESPACE: &str = "Windows.Foundation.Metadata";

/// Attribute type names in [`METADATA_NAMESPACE`].
pub mod well_known {
    pub const ACTIVATABLE: &str = "ActivatableAttribute";
    pub const COMPOSABLE: &str = "ComposableAttribute";
    pub const CONTRACT_VERSION: &str = "ContractVersionAttribute";
    pub const DEFAULT: &str = "DefaultAttribute";
    pub const EXCLUSIVE_TO: &str = "ExclusiveToAttribute";
    pub const FAST_ABI: &str = "FastAbiAttribute";
    pub const FEATURE: &str = "FeatureAttribute";
    pub const NO_EXCEPTION: &str = "NoExceptionAttribute";
    pub const OVERLOAD: &str = "OverloadAttribute";
    pub const OVERRIDABLE: &str = "OverridableAttribute";
    pub const STATIC: &str = "StaticAttribute";
    pub const VERSION: &str = "VersionAttribute";
}

/// A fixed (positional) attribute argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum AttrArg {
    Bool(bool),
    I32(i32),
    U32(u32),
    String(String),
    /// A `System.Type` argument, stored as the full type name.
    Type(TypeName),
    Enum(EnumArg),
}

/// An enum-typed attribute argument.
///
/// Only the integral value is stored; the enumerator name is recovered from
/// the enum definition when needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumArg {
    pub enum_type: TypeName,
    pub value: i32,
}

/// A custom attribute instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub type_name: TypeName,
    pub args: Vec<AttrArg>,
}

impl Attribute {
    pub fn new(type_name: TypeName) -> Self {
        Self {
            type_name,
            args: Vec::new(),
        }
    }

    /// An argument-less attribute from [`METADATA_NAMESPACE`].
    pub fn metadata(name: &str) -> Self {
        Self::new(TypeName::new(METADATA_NAMESPACE, name))
    }

    #[must_use]
    pub fn with_arg(mut self, arg: AttrArg) -> Self {
        self.args.push(arg);
        self
    }

    #[inline]
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.type_name.is(namespace, name)
    }

    #[inline]
    pub fn arg(&self, index: usize) -> Option<&AttrArg> {
        self.args.get(index)
    }

    /// The `u32` argument at `index`, if it has that shape.
    pub fn u32_arg(&self, index: usize) -> Option<u32> {
        match self.arg(index)? {
            AttrArg::U32(value) => Some(*value),
            _ => None,
        }
    }

    /// The string argument at `index`, if it has that shape.
    pub fn string_arg(&self, index: usize) -> Option<&str> {
        match self.arg(index)? {
            AttrArg::String(value) => Some(value),
            _ => None,
        }
    }

    /// The first `System.Type` argument, wherever it appears.
    pub fn first_type_arg(&self) -> Option<&TypeName> {
        self.args.iter().find_map(|arg| match arg {
            AttrArg::Type(name) => Some(name),
            _ => None,
        })
    }

    /// The first enum argument, wherever it appears.
    pub fn first_enum_arg(&self) -> Option<&EnumArg> {
        self.args.iter().find_map(|arg| match arg {
            AttrArg::Enum(value) => Some(value),
            _ => None,
        })
    }
}

/// Records that carry custom attributes.
pub trait HasAttributes {
    fn attributes(&self) -> &[Attribute];

    /// First attribute of the given type.
    fn attribute(&self, namespace: &str, name: &str) -> Option<&Attribute> {
        self.attributes().iter().find(|a| a.is(namespace, name))
    }

    fn has_attribute(&self, namespace: &str, name: &str) -> bool {
        self.attribute(namespace, name).is_some()
    }

    /// First attribute of the given type from [`METADATA_NAMESPACE`].
    fn metadata_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attribute(METADATA_NAMESPACE, name)
    }

    fn has_metadata_attribute(&self, name: &str) -> bool {
        self.metadata_attribute(name).is_some()
    }
}
