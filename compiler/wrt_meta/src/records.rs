//! Type, method, field and interface-implementation records.
//!
//! Records are built with the `with_*` helpers and then inserted into a
//! [`Repository`](crate::Repository), after which they are read-only.

use bitflags::bitflags;

use crate::{Attribute, HasAttributes, MethodSig, ParamSig, TypeDefOrRef, TypeName, TypeSig};

/// The kind of a nominal type definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeCategory {
    Interface,
    Class,
    Struct,
    Enum,
    Delegate,
}

/// A nominal type definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDef {
    pub name: TypeName,
    pub category: TypeCategory,

    /// Generic parameter names (e.g. `T` in ``IVector`1<T>``).
    pub generic_params: Vec<String>,

    /// Base type. `None` or `System.Object` both mean "no base class".
    pub extends: Option<TypeDefOrRef>,

    /// Declared interface-implementation edges, in declaration order.
    pub interface_impls: Vec<InterfaceImpl>,

    pub methods: Vec<MethodDef>,
    pub fields: Vec<Field>,
    pub attributes: Vec<Attribute>,
}

impl TypeDef {
    pub fn new(category: TypeCategory, namespace: &str, name: &str) -> Self {
        Self {
            name: TypeName::new(namespace, name),
            category,
            generic_params: Vec::new(),
            extends: None,
            interface_impls: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new(TypeCategory::Interface, namespace, name)
    }

    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(TypeCategory::Class, namespace, name)
    }

    #[must_use]
    pub fn with_generic_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_extends(mut self, base: TypeDefOrRef) -> Self {
        self.extends = Some(base);
        self
    }

    #[must_use]
    pub fn implements(mut self, edge: InterfaceImpl) -> Self {
        self.interface_impls.push(edge);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

impl HasAttributes for TypeDef {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// A declared "type implements interface" edge.
///
/// Default and overridable markers are attributes on the edge itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceImpl {
    pub interface: TypeDefOrRef,
    pub attributes: Vec<Attribute>,
}

impl InterfaceImpl {
    pub fn new(interface: TypeDefOrRef) -> Self {
        Self {
            interface,
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Mark as the type's default interface.
    #[must_use]
    pub fn default_interface(self) -> Self {
        self.with_attribute(Attribute::metadata(crate::well_known::DEFAULT))
    }

    /// Mark as overridable by derived classes.
    #[must_use]
    pub fn overridable(self) -> Self {
        self.with_attribute(Attribute::metadata(crate::well_known::OVERRIDABLE))
    }
}

impl HasAttributes for InterfaceImpl {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

bitflags! {
    /// Method attribute flags (subset of the ECMA-335 `MethodAttributes`).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct MethodFlags: u16 {
        const STATIC = 0x0010;
        const FINAL = 0x0020;
        const VIRTUAL = 0x0040;
        const HIDE_BY_SIG = 0x0080;
        const ABSTRACT = 0x0400;
        /// Name carries meaning to tools (property and event accessors).
        const SPECIAL_NAME = 0x0800;
        const RT_SPECIAL_NAME = 0x1000;
    }
}

/// A parameter row. Sequence 0 is the return value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: String,
    pub sequence: u16,
}

/// A method definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDef {
    pub name: String,
    pub flags: MethodFlags,
    /// Parameter rows, ordered by sequence.
    pub params: Vec<Param>,
    pub signature: MethodSig,
    pub attributes: Vec<Attribute>,
}

impl MethodDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: MethodFlags::empty(),
            params: Vec::new(),
            signature: MethodSig::default(),
            attributes: Vec::new(),
        }
    }

    #[inline]
    pub fn is_special_name(&self) -> bool {
        self.flags.contains(MethodFlags::SPECIAL_NAME)
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn special_name(self) -> Self {
        self.with_flags(MethodFlags::SPECIAL_NAME)
    }

    /// Set the return type. Adds no parameter row.
    #[must_use]
    pub fn returning(mut self, ty: TypeSig) -> Self {
        self.signature.return_type = Some(ty);
        self
    }

    /// Set the return type and a named return parameter row (sequence 0).
    #[must_use]
    pub fn returning_named(mut self, name: impl Into<String>, ty: TypeSig) -> Self {
        self.signature.return_type = Some(ty);
        self.params.retain(|p| p.sequence != 0);
        self.params.insert(
            0,
            Param {
                name: name.into(),
                sequence: 0,
            },
        );
        self
    }

    /// Append an input parameter and its row.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: TypeSig) -> Self {
        let sequence = u16::try_from(self.signature.params.len() + 1).unwrap_or(u16::MAX);
        self.params.push(Param {
            name: name.into(),
            sequence,
        });
        self.signature.params.push(ParamSig::new(ty));
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

impl HasAttributes for MethodDef {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// A field. Enum enumerators carry their integral value in `constant`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    pub name: String,
    pub signature: TypeSig,
    pub constant: Option<i64>,
}

impl Field {
    pub fn new(name: impl Into<String>, signature: TypeSig) -> Self {
        Self {
            name: name.into(),
            signature,
            constant: None,
        }
    }

    /// An enumerator with an `Int32` underlying value.
    pub fn enumerator(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            signature: TypeSig::Element(crate::ElementType::I4),
            constant: Some(value),
        }
    }
}
