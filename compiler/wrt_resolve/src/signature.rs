//! Method signature classification.
//!
//! Pairs parameter rows with their signatures and derives the facts
//! emission needs per method: accessor kind, projected name, whether the
//! method may throw, and whether it is "async".
//!
//! "Async" here is about argument retention. Collection-shaped inputs may be
//! read or copied during a call but not kept. Two kinds of method may keep
//! them past the return: property setters, and methods returning one of the
//! asynchronous operation interfaces. Emission uses [`MethodSignature::is_async`]
//! to decide which parameters need defensive copies.

use wrt_meta::{
    well_known, HasAttributes, MethodDef, Param, ParamSig, Repository, TypeDef, TypeDefOrRef,
    TypeSig,
};

use crate::ResolveError;

/// Namespace of the asynchronous operation interfaces.
const ASYNC_NAMESPACE: &str = "Windows.Foundation";

/// Non-generic asynchronous action.
const ASYNC_ACTION: &str = "IAsyncAction";

/// Generic asynchronous operation shapes.
const ASYNC_GENERICS: [&str; 3] = [
    "IAsyncOperation`1",
    "IAsyncActionWithProgress`1",
    "IAsyncOperationWithProgress`2",
];

/// Name used for the return value when it has no parameter row.
pub const DEFAULT_RETURN_NAME: &str = "impl_result";

/// Property or event accessor role of a method.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessorKind {
    #[default]
    None,
    Get,
    Put,
    Add,
    Remove,
}

impl AccessorKind {
    /// Classify from the special-name flag and name prefix.
    pub fn of(method: &MethodDef) -> Self {
        if !method.is_special_name() {
            return Self::None;
        }

        let name = method.name.as_str();
        if name.starts_with("get_") {
            Self::Get
        } else if name.starts_with("put_") {
            Self::Put
        } else if name.starts_with("add_") {
            Self::Add
        } else if name.starts_with("remove_") {
            Self::Remove
        } else {
            Self::None
        }
    }
}

/// Derived view of one method.
#[derive(Clone, Debug)]
pub struct MethodSignature<'a> {
    method: &'a MethodDef,
    return_param: Option<&'a Param>,
    params: Vec<(Option<&'a Param>, &'a ParamSig)>,
    accessor: AccessorKind,
    is_async: bool,
}

impl<'a> MethodSignature<'a> {
    pub fn new(repo: &Repository, method: &'a MethodDef) -> Self {
        let mut rows = method.params.iter().peekable();

        let return_param = if method.signature.return_type.is_some() {
            rows.next_if(|row| row.sequence == 0)
        } else {
            None
        };

        let params = method
            .signature
            .params
            .iter()
            .map(|sig| (rows.next(), sig))
            .collect();

        let accessor = AccessorKind::of(method);
        let is_async = accessor == AccessorKind::Put
            || method
                .signature
                .return_type
                .as_ref()
                .is_some_and(|ty| is_async_shape(repo, ty));

        Self {
            method,
            return_param,
            params,
            accessor,
            is_async,
        }
    }

    #[inline]
    pub fn method(&self) -> &'a MethodDef {
        self.method
    }

    /// Input parameters paired with their rows. A signature parameter with
    /// no matching row pairs with `None`.
    #[inline]
    pub fn params(&self) -> &[(Option<&'a Param>, &'a ParamSig)] {
        &self.params
    }

    #[inline]
    pub fn return_signature(&self) -> Option<&'a TypeSig> {
        self.method.signature.return_type.as_ref()
    }

    /// The return value's parameter row, if it has one.
    #[inline]
    pub fn return_param(&self) -> Option<&'a Param> {
        self.return_param
    }

    /// Name for the return value, falling back to [`DEFAULT_RETURN_NAME`].
    pub fn return_param_name(&self) -> &'a str {
        self.return_param
            .map_or(DEFAULT_RETURN_NAME, |param| param.name.as_str())
    }

    #[inline]
    pub fn accessor(&self) -> AccessorKind {
        self.accessor
    }

    #[inline]
    pub fn is_async(&self) -> bool {
        self.is_async
    }

    /// Removal accessors never fail; other methods opt in by attribute.
    pub fn is_noexcept(&self) -> bool {
        self.accessor == AccessorKind::Remove
            || self.method.has_metadata_attribute(well_known::NO_EXCEPTION)
    }

    /// Externally visible name: the overload name if declared, otherwise
    /// the raw name with any accessor prefix removed.
    pub fn name(&self) -> &'a str {
        if let Some(overload) = self.overload_name() {
            return overload;
        }

        let name = self.method.name.as_str();
        if self.method.is_special_name() {
            if let Some((_, rest)) = name.split_once('_') {
                return rest;
            }
        }
        name
    }

    /// ABI name: the overload name if declared, otherwise the raw name.
    pub fn abi_name(&self) -> &'a str {
        self.overload_name().unwrap_or(self.method.name.as_str())
    }

    fn overload_name(&self) -> Option<&'a str> {
        self.method
            .metadata_attribute(well_known::OVERLOAD)?
            .string_arg(0)
    }
}

/// Whether a return type is one of the asynchronous operation shapes.
pub fn is_async_shape(repo: &Repository, sig: &TypeSig) -> bool {
    match sig {
        TypeSig::Type(TypeDefOrRef::Spec(inst)) | TypeSig::GenericInst(inst) => {
            let name = repo.type_name(&inst.generic_type);
            name.namespace() == ASYNC_NAMESPACE && ASYNC_GENERICS.contains(&name.name())
        }
        TypeSig::Type(ty) => repo.type_name(ty).is(ASYNC_NAMESPACE, ASYNC_ACTION),
        TypeSig::Element(_) | TypeSig::GenericParam(_) | TypeSig::Array(_) => false,
    }
}

/// The `Invoke` method of a delegate.
pub fn delegate_invoke(def: &TypeDef) -> Result<&MethodDef, ResolveError> {
    def.methods
        .iter()
        .find(|method| method.name == "Invoke")
        .ok_or_else(|| ResolveError::MissingDelegateInvoke {
            ty: def.name.clone(),
        })
}
