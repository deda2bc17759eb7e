//! Type and method signatures.
//!
//! Signatures form a closed set of shapes. Consumers (categorization, async
//! detection, name rendering) match on [`TypeSig`] exhaustively.

use crate::{TypeDefId, TypeName};

/// Primitive element types that appear directly in signatures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementType {
    Boolean,
    Char,
    I1,
    U1,
    I2,
    U2,
    I4,
    U4,
    I8,
    U8,
    R4,
    R8,
    String,
    Object,
}

impl ElementType {
    /// The runtime type name for this element (e.g. `Int32`).
    pub const fn clr_name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Char => "Char",
            Self::I1 => "SByte",
            Self::U1 => "Byte",
            Self::I2 => "Int16",
            Self::U2 => "UInt16",
            Self::I4 => "Int32",
            Self::U4 => "UInt32",
            Self::I8 => "Int64",
            Self::U8 => "UInt64",
            Self::R4 => "Single",
            Self::R8 => "Double",
            Self::String => "String",
            Self::Object => "Object",
        }
    }
}

/// A reference to a type: a local definition, a by-name reference that
/// needs repository lookup, or a generic instantiation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeDefOrRef {
    Def(TypeDefId),
    Ref(TypeName),
    Spec(GenericTypeInst),
}

impl TypeDefOrRef {
    /// Shorthand for a by-name reference.
    pub fn named(namespace: &str, name: &str) -> Self {
        Self::Ref(TypeName::new(namespace, name))
    }
}

/// A generic definition bound with concrete type arguments.
///
/// Arguments may themselves be instantiations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericTypeInst {
    /// The generic definition (`Def` or `Ref`).
    pub generic_type: Box<TypeDefOrRef>,
    /// Bound arguments in declaration order.
    pub args: Vec<TypeSig>,
}

impl GenericTypeInst {
    pub fn new(generic_type: TypeDefOrRef, args: Vec<TypeSig>) -> Self {
        Self {
            generic_type: Box::new(generic_type),
            args,
        }
    }
}

/// The shape of a parameter, return, or field type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeSig {
    /// A primitive element.
    Element(ElementType),
    /// A nominal type.
    Type(TypeDefOrRef),
    /// A bound generic instantiation.
    GenericInst(GenericTypeInst),
    /// An unbound generic parameter, by position in the enclosing definition.
    GenericParam(u32),
    /// A single-dimension array.
    Array(Box<TypeSig>),
}

impl TypeSig {
    /// Shorthand for a by-name nominal reference.
    pub fn named(namespace: &str, name: &str) -> Self {
        Self::Type(TypeDefOrRef::named(namespace, name))
    }

    /// Wrap in an array.
    pub fn array_of(element: TypeSig) -> Self {
        Self::Array(Box::new(element))
    }
}

/// A method parameter signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSig {
    pub ty: TypeSig,
    /// Passed by reference (out/fill parameters).
    pub by_ref: bool,
}

impl ParamSig {
    pub fn new(ty: TypeSig) -> Self {
        Self { ty, by_ref: false }
    }
}

/// A method signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodSig {
    /// `None` for void methods.
    pub return_type: Option<TypeSig>,
    pub params: Vec<ParamSig>,
}
