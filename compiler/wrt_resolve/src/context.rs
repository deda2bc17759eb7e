//! Per-run projection context.
//!
//! Bundles the repository, renderer, and settings so emission code can ask
//! per-type questions without threading three arguments everywhere. The
//! context holds only shared borrows and is `Sync` whenever the renderer is,
//! so one context can drive a parallel batch.
//!
//! # Lifecycle
//!
//! ```text
//! Repository (loaded once)
//!     └── Projection (one per run, per settings)
//!             ├── interfaces(ty)      → fresh ResolvedInterfaces per call
//!             ├── factories(ty)       → fresh map per call
//!             └── resolve_all(types)  → rayon, one resolution per type
//! ```

use rayon::prelude::*;
use wrt_meta::{MethodDef, Repository, TypeDef, TypeDefId, TypeSig};

use crate::bases::implements_interface;
use crate::category::{categorize, Categorized};
use crate::factory::{factories, Factories};
use crate::fastabi::{has_fastabi_tearoffs, order, slot_count};
use crate::feature::{has_fastabi, is_always_disabled, is_always_enabled};
use crate::produce::can_produce;
use crate::signature::MethodSignature;
use crate::{InterfaceResolver, NameRender, ResolveError, ResolveSettings, ResolvedInterfaces};

/// Resolution entry point for one generation run.
#[derive(Debug)]
pub struct Projection<'a, R> {
    repo: &'a Repository,
    renderer: &'a R,
    settings: &'a ResolveSettings,
}

impl<'a, R: NameRender> Projection<'a, R> {
    pub fn new(repo: &'a Repository, renderer: &'a R, settings: &'a ResolveSettings) -> Self {
        Self {
            repo,
            renderer,
            settings,
        }
    }

    #[inline]
    pub fn repo(&self) -> &'a Repository {
        self.repo
    }

    #[inline]
    pub fn settings(&self) -> &'a ResolveSettings {
        self.settings
    }

    #[inline]
    fn def(&self, ty: TypeDefId) -> &'a TypeDef {
        self.repo.get(ty)
    }

    /// The type's interfaces, fast-ABI ordered when the type asks for it.
    pub fn interfaces(&self, ty: TypeDefId) -> Result<ResolvedInterfaces, ResolveError> {
        let mut interfaces = InterfaceResolver::new(self.repo, self.renderer).resolve(ty)?;
        order(
            self.repo,
            &mut interfaces,
            has_fastabi(self.def(ty), self.settings),
        );
        Ok(interfaces)
    }

    /// Fast-ABI dispatch slot count for a class (0 without fast-ABI).
    pub fn slot_count(&self, ty: TypeDefId) -> Result<usize, ResolveError> {
        let def = self.def(ty);
        if !has_fastabi(def, self.settings) {
            return Ok(0);
        }
        slot_count(self.repo, def, &self.interfaces(ty)?, self.settings)
    }

    /// Largest slot count over a set of classes.
    pub fn max_slot_count(&self, types: &[TypeDefId]) -> Result<usize, ResolveError> {
        types
            .iter()
            .try_fold(0, |max, &ty| Ok(max.max(self.slot_count(ty)?)))
    }

    pub fn has_fastabi_tearoffs(&self, ty: TypeDefId) -> Result<bool, ResolveError> {
        Ok(has_fastabi_tearoffs(&self.interfaces(ty)?))
    }

    pub fn factories(&self, ty: TypeDefId) -> Result<Factories, ResolveError> {
        factories(self.repo, self.renderer, self.def(ty))
    }

    pub fn method_signature<'m>(&self, method: &'m MethodDef) -> MethodSignature<'m> {
        MethodSignature::new(self.repo, method)
    }

    pub fn categorize(&self, sig: &TypeSig) -> Result<Categorized, ResolveError> {
        categorize(self.repo, sig)
    }

    pub fn is_always_disabled(&self, ty: TypeDefId) -> bool {
        is_always_disabled(self.repo, self.def(ty), self.settings)
    }

    pub fn is_always_enabled(&self, ty: TypeDefId) -> bool {
        is_always_enabled(self.repo, self.def(ty))
    }

    pub fn can_produce(&self, ty: TypeDefId) -> Result<bool, ResolveError> {
        can_produce(self.repo, self.renderer, self.def(ty), self.settings)
    }

    pub fn implements_interface(&self, ty: TypeDefId, name: &str) -> Result<bool, ResolveError> {
        implements_interface(self.repo, self.renderer, self.def(ty), name)
    }
}

impl<R: NameRender + Sync> Projection<'_, R> {
    /// Resolve many types in parallel, one independent resolution per type.
    ///
    /// Results come back in input order. A failing type does not affect the
    /// others; callers decide whether to drop it or fail the batch.
    #[tracing::instrument(level = "debug", skip_all, fields(count = types.len()))]
    pub fn resolve_all(
        &self,
        types: &[TypeDefId],
    ) -> Vec<(TypeDefId, Result<ResolvedInterfaces, ResolveError>)> {
        let results: Vec<_> = types
            .par_iter()
            .map(|&ty| (ty, self.interfaces(ty)))
            .collect();

        let failed = results.iter().filter(|(_, result)| result.is_err()).count();
        if failed > 0 {
            tracing::warn!(failed, "some types could not be resolved");
        }
        results
    }
}
