//! Interface closure resolution.
//!
//! Computes the full set of interfaces a type exposes: the ones it declares,
//! the ones those interfaces require (transitively, through generic
//! instantiations), and the ones inherited from base classes.
//!
//! # Walk order
//!
//! The type's own edges are walked first with `base = false`, then each
//! base class's edges, closest first, with `base = true`. Within an edge the
//! required interfaces are walked before the edge's own entry is written,
//! so every child is finalized before its parent.
//!
//! # Merge rule
//!
//! Entries are keyed by rendered name. An edge whose key already exists is
//! skipped, sub-graph included, unless the existing entry is not defaulted
//! and the new discovery is. In that case the entry and its sub-graph are
//! re-walked and overwritten, which upgrades them to defaulted. A defaulted
//! entry is never touched again, so each edge is visited at most twice.
//!
//! Base walks always compute `defaulted = false`, so they can never
//! overwrite an entry found through the type's own edges.

use rustc_hash::FxHashMap;
use wrt_meta::{
    well_known, HasAttributes, InterfaceImpl, Repository, TypeCategory, TypeDefId, TypeDefOrRef,
};

use crate::bases::{bases, default_interface};
use crate::generics::ArgNames;
use crate::stack::ensure_sufficient_stack;
use crate::version::{version_of, Version};
use crate::{GenericArgStack, NameRender, ResolveError};

/// One resolved interface.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceInfo {
    /// The interface definition (the generic definition for instantiations).
    pub ty: TypeDefId,

    /// The edge that discovered this entry is marked default.
    pub is_default: bool,

    /// Reached through a default-bearing path from the type itself.
    /// Once set it stays set.
    pub defaulted: bool,

    /// Reached through an overridable edge.
    pub overridable: bool,

    /// Reached only through a base class.
    pub base: bool,

    /// The interface is exclusive to one class.
    pub exclusive: bool,

    /// Part of the fast-ABI prefix (set by [`order`](crate::fastabi::order)).
    pub fastabi: bool,

    pub version: Version,

    /// Rendered generic arguments, outermost instantiation first.
    pub generic_param_stack: Vec<Vec<String>>,
}

/// Resolved interfaces in discovery order, unique by rendered name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedInterfaces {
    entries: Vec<(String, InterfaceInfo)>,

    /// Rendered name -> position in `entries`.
    index: FxHashMap<String, usize>,
}

impl ResolvedInterfaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceInfo> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InterfaceInfo)> {
        self.entries.iter().map(|(name, info)| (name.as_str(), info))
    }

    /// Rendered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn as_slice(&self) -> &[(String, InterfaceInfo)] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<(String, InterfaceInfo)> {
        self.entries
    }

    /// Overwrite in place, or append a new key at the end.
    pub(crate) fn insert_or_assign(&mut self, name: String, info: InterfaceInfo) {
        if let Some(&i) = self.index.get(&name) {
            self.entries[i].1 = info;
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, info));
        }
    }

    /// Replace the order wholesale. `entries` must hold the same keys.
    pub(crate) fn reorder(&mut self, entries: Vec<(String, InterfaceInfo)>) {
        self.index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();
        self.entries = entries;
    }

    pub(crate) fn take_entries(&mut self) -> Vec<(String, InterfaceInfo)> {
        self.index.clear();
        std::mem::take(&mut self.entries)
    }
}

/// Flags and generic context handed down from the discovering edge.
#[derive(Clone, Debug)]
struct Inherited {
    defaulted: bool,
    overridable: bool,
    base: bool,
    scope: GenericArgStack,
}

impl Inherited {
    fn root(base: bool) -> Self {
        Self {
            defaulted: false,
            overridable: false,
            base,
            scope: GenericArgStack::new(),
        }
    }
}

/// Walks interface-implementation edges for one type at a time.
///
/// Holds only shared borrows; one resolver can serve many threads.
#[derive(Debug)]
pub struct InterfaceResolver<'a, R> {
    repo: &'a Repository,
    renderer: &'a R,
}

impl<'a, R: NameRender> InterfaceResolver<'a, R> {
    pub fn new(repo: &'a Repository, renderer: &'a R) -> Self {
        Self { repo, renderer }
    }

    /// Resolve the interface closure of `ty` in discovery order.
    ///
    /// A class that declares interfaces must mark one of them default.
    #[tracing::instrument(level = "debug", skip_all, fields(ty = %self.repo.get(ty).name))]
    pub fn resolve(&self, ty: TypeDefId) -> Result<ResolvedInterfaces, ResolveError> {
        let def = self.repo.get(ty);
        if def.category == TypeCategory::Class {
            default_interface(def)?;
        }

        let mut result = ResolvedInterfaces::new();
        self.walk(&mut result, &Inherited::root(false), &def.interface_impls)?;

        for base in bases(self.repo, def)? {
            let base_def = self.repo.get(base);
            tracing::trace!(base = %base_def.name, "walking base class");
            self.walk(&mut result, &Inherited::root(true), &base_def.interface_impls)?;
        }

        tracing::debug!(count = result.len(), "interface closure resolved");
        Ok(result)
    }

    fn walk(
        &self,
        result: &mut ResolvedInterfaces,
        inherited: &Inherited,
        edges: &[InterfaceImpl],
    ) -> Result<(), ResolveError> {
        ensure_sufficient_stack(|| {
            for edge in edges {
                self.visit(result, inherited, edge)?;
            }
            Ok(())
        })
    }

    fn visit(
        &self,
        result: &mut ResolvedInterfaces,
        inherited: &Inherited,
        edge: &InterfaceImpl,
    ) -> Result<(), ResolveError> {
        let name = self
            .renderer
            .render_type(self.repo, &edge.interface, &inherited.scope);
        let is_default = edge.has_metadata_attribute(well_known::DEFAULT);
        let defaulted = !inherited.base && (inherited.defaulted || is_default);

        if let Some(existing) = result.get(&name) {
            if existing.defaulted || !defaulted {
                tracing::trace!(interface = %name, "already resolved");
                return Ok(());
            }
            tracing::trace!(interface = %name, "upgrading to defaulted");
        }

        let overridable =
            inherited.overridable || edge.has_metadata_attribute(well_known::OVERRIDABLE);

        let (ty, scope) = match &edge.interface {
            TypeDefOrRef::Def(id) => (*id, inherited.scope.clone()),
            TypeDefOrRef::Ref(type_name) => {
                (self.repo.find_required(type_name)?, inherited.scope.clone())
            }
            TypeDefOrRef::Spec(inst) => {
                let args: ArgNames = inst
                    .args
                    .iter()
                    .map(|arg| self.renderer.render_sig(self.repo, arg, &inherited.scope))
                    .collect();
                (self.repo.resolve(&inst.generic_type)?, inherited.scope.push(args))
            }
        };

        let def = self.repo.get(ty);
        let info = InterfaceInfo {
            ty,
            is_default,
            defaulted,
            overridable,
            base: inherited.base,
            exclusive: def.has_metadata_attribute(well_known::EXCLUSIVE_TO),
            fastabi: false,
            version: version_of(def),
            generic_param_stack: scope.to_vec(),
        };

        let child = Inherited {
            defaulted,
            overridable,
            base: inherited.base,
            scope,
        };
        self.walk(result, &child, &def.interface_impls)?;

        result.insert_or_assign(name, info);
        Ok(())
    }
}
