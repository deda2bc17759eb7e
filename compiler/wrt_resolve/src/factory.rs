//! Factory contract discovery.
//!
//! A class advertises how it is constructed with three attributes:
//!
//! - `ActivatableAttribute`: activation, optionally through a named factory
//!   interface (absent means the implicit default activation factory)
//! - `StaticAttribute`: a static-members interface
//! - `ComposableAttribute`: a composition factory plus a visibility enum
//!   whose value `2` means the composed instance is publicly constructible
//!
//! Results are keyed by the rendered factory interface name, with `""` for
//! the implicit factory. Later attributes overwrite earlier ones with the
//! same key.

use std::collections::BTreeMap;

use wrt_meta::{well_known, Attribute, Repository, TypeDef, TypeDefId, TypeDefOrRef};

use crate::{GenericArgStack, NameRender, ResolveError};

/// Visibility enumerant denoting a publicly composable class.
const PUBLIC_COMPOSITION: i32 = 2;

/// One discovered factory contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FactoryInfo {
    /// Factory interface; `None` for the implicit activation factory.
    pub ty: Option<TypeDefId>,
    pub activatable: bool,
    pub statics: bool,
    pub composable: bool,
    /// Composable only: the composed instance is publicly constructible.
    pub visible: bool,
}

/// Factory contracts ordered by factory name.
pub type Factories = BTreeMap<String, FactoryInfo>;

fn factory_type(repo: &Repository, attribute: &Attribute) -> Result<Option<TypeDefId>, ResolveError> {
    attribute
        .first_type_arg()
        .map(|name| repo.find_required(name))
        .transpose()
        .map_err(ResolveError::from)
}

/// Scan a class's attributes for factory contracts.
#[tracing::instrument(level = "debug", skip_all, fields(ty = %def.name))]
pub fn factories<R: NameRender>(
    repo: &Repository,
    renderer: &R,
    def: &TypeDef,
) -> Result<Factories, ResolveError> {
    let mut result = Factories::new();

    for attribute in &def.attributes {
        if attribute.type_name.namespace() != wrt_meta::METADATA_NAMESPACE {
            continue;
        }

        let mut info = FactoryInfo::default();
        match attribute.type_name.name() {
            well_known::ACTIVATABLE => info.activatable = true,
            well_known::STATIC => info.statics = true,
            well_known::COMPOSABLE => {
                info.composable = true;
                info.visible = attribute
                    .first_enum_arg()
                    .is_some_and(|visibility| visibility.value == PUBLIC_COMPOSITION);
            }
            _ => continue,
        }
        info.ty = factory_type(repo, attribute)?;

        let name = info.ty.map_or_else(String::new, |id| {
            renderer.render_type(repo, &TypeDefOrRef::Def(id), &GenericArgStack::new())
        });

        tracing::trace!(factory = %name, ?info, "factory contract");
        result.insert(name, info);
    }

    Ok(result)
}

/// Whether constructing or calling statics needs generated members: the
/// implicit factory, or any factory interface with methods.
pub fn has_factory_members(repo: &Repository, factories: &Factories) -> bool {
    factories
        .values()
        .any(|info| info.ty.map_or(true, |id| !repo.get(id).methods.is_empty()))
}

/// Whether the class can be composed (derived from) at all.
pub fn is_composable(factories: &Factories) -> bool {
    factories.values().any(|info| info.composable)
}

/// Whether a composition factory declares any constructors.
pub fn has_composable_constructors(repo: &Repository, factories: &Factories) -> bool {
    factories.values().any(|info| {
        info.composable
            && info
                .ty
                .is_some_and(|id| !repo.get(id).methods.is_empty())
    })
}

#[cfg(test)]
mod tests;
