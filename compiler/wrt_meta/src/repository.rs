//! The metadata repository.
//!
//! A flat store of [`TypeDef`] records with a by-name index. Records are
//! appended during loading and never mutated afterwards, so a shared
//! `&Repository` can be read from many threads at once.

use rustc_hash::FxHashMap;

use crate::{EnumArg, MetadataError, TypeDef, TypeDefId, TypeDefOrRef, TypeName};

/// Store of type definitions with lookup by handle or by name.
#[derive(Clone, Debug, Default)]
pub struct Repository {
    /// All definitions; `TypeDefId` indexes this vector.
    types: Vec<TypeDef>,

    /// Full name -> handle.
    by_name: FxHashMap<TypeName, TypeDefId>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition and return its handle.
    ///
    /// A later definition with the same name shadows the earlier one for
    /// by-name lookup; both stay addressable by handle.
    pub fn insert(&mut self, def: TypeDef) -> TypeDefId {
        let id = TypeDefId::from_raw(u32::try_from(self.types.len()).unwrap_or(u32::MAX));
        self.by_name.insert(def.name.clone(), id);
        self.types.push(def);
        id
    }

    /// Get a definition by handle.
    ///
    /// Handles are only issued by [`insert`](Self::insert), so indexing a
    /// handle from this repository cannot fail.
    #[inline]
    pub fn get(&self, id: TypeDefId) -> &TypeDef {
        &self.types[id.index()]
    }

    #[inline]
    pub fn try_get(&self, id: TypeDefId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    #[inline]
    pub fn find(&self, name: &TypeName) -> Option<TypeDefId> {
        self.by_name.get(name).copied()
    }

    /// Look up a name that must be present.
    pub fn find_required(&self, name: &TypeName) -> Result<TypeDefId, MetadataError> {
        self.find(name)
            .ok_or_else(|| MetadataError::NotFound(name.clone()))
    }

    /// Resolve a reference to the definition it names.
    ///
    /// Instantiations resolve to their generic definition.
    pub fn resolve(&self, ty: &TypeDefOrRef) -> Result<TypeDefId, MetadataError> {
        match ty {
            TypeDefOrRef::Def(id) => Ok(*id),
            TypeDefOrRef::Ref(name) => self.find_required(name),
            TypeDefOrRef::Spec(inst) => self.resolve(&inst.generic_type),
        }
    }

    /// The full name a reference points at, without requiring the target to
    /// be present.
    pub fn type_name<'a>(&'a self, ty: &'a TypeDefOrRef) -> &'a TypeName {
        match ty {
            TypeDefOrRef::Def(id) => &self.get(*id).name,
            TypeDefOrRef::Ref(name) => name,
            TypeDefOrRef::Spec(inst) => self.type_name(&inst.generic_type),
        }
    }

    /// Name of the enumerator an enum argument refers to.
    ///
    /// Returns `None` when the enum type is not loaded or has no field with
    /// that value.
    pub fn enumerator_name(&self, arg: &EnumArg) -> Option<&str> {
        let def = self.get(self.find(&arg.enum_type)?);
        def.fields
            .iter()
            .find(|field| field.constant == Some(i64::from(arg.value)))
            .map(|field| field.name.as_str())
    }

    /// Iterate over all definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeDefId, &TypeDef)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, def)| (TypeDefId::from_raw(u32::try_from(i).unwrap_or(u32::MAX)), def))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
