//! Type signature categorization.
//!
//! Classifies each parameter or return signature into the marshaling
//! category that drives how emission passes it across the ABI. The match is
//! exhaustive over [`TypeSig`], so every signature shape has exactly one
//! category. The only failure is a by-name reference that the repository
//! cannot resolve.

use wrt_meta::{ElementType, Repository, TypeCategory, TypeDefId, TypeDefOrRef, TypeSig};

use crate::ResolveError;

/// Marshaling category of a type signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamCategory {
    /// Unbound generic parameter.
    Generic,
    /// Interface, class, delegate, instantiation, or `Object`.
    Object,
    String,
    Enum,
    Struct,
    Array,
    /// Any other primitive.
    Fundamental,
}

/// A category plus the definition it was derived from, when one exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Categorized {
    pub category: ParamCategory,
    pub definition: Option<TypeDefId>,
}

impl Categorized {
    const fn of(category: ParamCategory) -> Self {
        Self {
            category,
            definition: None,
        }
    }
}

fn categorize_element(element: ElementType) -> ParamCategory {
    match element {
        ElementType::String => ParamCategory::String,
        ElementType::Object => ParamCategory::Object,
        ElementType::Boolean
        | ElementType::Char
        | ElementType::I1
        | ElementType::U1
        | ElementType::I2
        | ElementType::U2
        | ElementType::I4
        | ElementType::U4
        | ElementType::I8
        | ElementType::U8
        | ElementType::R4
        | ElementType::R8 => ParamCategory::Fundamental,
    }
}

fn categorize_nominal(repo: &Repository, ty: &TypeDefOrRef) -> Result<Categorized, ResolveError> {
    let id = match ty {
        TypeDefOrRef::Def(id) => *id,
        TypeDefOrRef::Ref(name) if name.is_system_guid() => {
            return Ok(Categorized::of(ParamCategory::Struct));
        }
        TypeDefOrRef::Ref(name) => repo.find_required(name)?,
        TypeDefOrRef::Spec(_) => return Ok(Categorized::of(ParamCategory::Object)),
    };

    let category = match repo.get(id).category {
        TypeCategory::Interface | TypeCategory::Class | TypeCategory::Delegate => {
            ParamCategory::Object
        }
        TypeCategory::Struct => ParamCategory::Struct,
        TypeCategory::Enum => ParamCategory::Enum,
    };

    Ok(Categorized {
        category,
        definition: Some(id),
    })
}

/// Categorize a signature.
pub fn categorize(repo: &Repository, sig: &TypeSig) -> Result<Categorized, ResolveError> {
    match sig {
        TypeSig::Array(_) => Ok(Categorized::of(ParamCategory::Array)),
        TypeSig::Element(element) => Ok(Categorized::of(categorize_element(*element))),
        TypeSig::Type(ty) => categorize_nominal(repo, ty),
        TypeSig::GenericInst(_) => Ok(Categorized::of(ParamCategory::Object)),
        TypeSig::GenericParam(_) => Ok(Categorized::of(ParamCategory::Generic)),
    }
}

/// Whether the signature is the `Object` primitive itself.
pub fn is_object(sig: &TypeSig) -> bool {
    matches!(sig, TypeSig::Element(ElementType::Object))
}

#[cfg(test)]
mod tests;
