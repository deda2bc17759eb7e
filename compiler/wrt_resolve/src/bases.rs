//! Base-chain and default-interface queries.

use wrt_meta::{well_known, HasAttributes, Repository, TypeDef, TypeDefId, TypeDefOrRef};

use crate::{GenericArgStack, NameRender, ResolveError};

/// The direct base class, or `None` at the root (`System.Object` included).
pub fn base_class(repo: &Repository, def: &TypeDef) -> Result<Option<TypeDefId>, ResolveError> {
    let Some(extends) = &def.extends else {
        return Ok(None);
    };

    if repo.type_name(extends).is_system_object() {
        return Ok(None);
    }

    Ok(Some(repo.resolve(extends)?))
}

/// All base classes, closest first.
///
/// The base chain is acyclic by construction in well-formed metadata; a
/// cycle is cut at the first repeated type.
pub fn bases(repo: &Repository, def: &TypeDef) -> Result<Vec<TypeDefId>, ResolveError> {
    let mut result = Vec::new();
    let mut current = base_class(repo, def)?;

    while let Some(id) = current {
        if result.contains(&id) {
            tracing::warn!(ty = %def.name, "cyclic base chain");
            break;
        }
        result.push(id);
        current = base_class(repo, repo.get(id))?;
    }

    Ok(result)
}

/// The interface marked default among the type's own edges.
///
/// A type with no edges has no default interface. A type with edges but
/// none marked default is an error.
pub fn default_interface(def: &TypeDef) -> Result<Option<&TypeDefOrRef>, ResolveError> {
    if let Some(edge) = def
        .interface_impls
        .iter()
        .find(|edge| edge.has_metadata_attribute(well_known::DEFAULT))
    {
        return Ok(Some(&edge.interface));
    }

    if def.interface_impls.is_empty() {
        Ok(None)
    } else {
        Err(ResolveError::MissingDefaultInterface {
            ty: def.name.clone(),
        })
    }
}

/// Whether the type or any base class directly declares a non-generic
/// interface with the given rendered name.
pub fn implements_interface<R: NameRender>(
    repo: &Repository,
    renderer: &R,
    def: &TypeDef,
    name: &str,
) -> Result<bool, ResolveError> {
    let scope = GenericArgStack::new();
    let declares = |def: &TypeDef| {
        def.interface_impls.iter().any(|edge| {
            !matches!(edge.interface, TypeDefOrRef::Spec(_))
                && renderer.render_type(repo, &edge.interface, &scope) == name
        })
    };

    if declares(def) {
        return Ok(true);
    }

    for base in bases(repo, def)? {
        if declares(repo.get(base)) {
            return Ok(true);
        }
    }

    Ok(false)
}
