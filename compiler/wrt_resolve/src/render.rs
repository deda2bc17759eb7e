//! Name rendering contract.
//!
//! The rendered name of an interface is its dedup key in the resolved
//! surface, so a renderer must map distinct effective interfaces to
//! distinct strings and return the same string for the same input every
//! time within a run.
//!
//! Generic parameters are rendered by substituting the innermost frame of
//! the [`GenericArgStack`]; those frame entries were themselves rendered in
//! the enclosing context, so nesting composes without re-walking.

use wrt_meta::{GenericTypeInst, Repository, TypeDefOrRef, TypeSig};

use crate::GenericArgStack;

/// Produces canonical display strings for types and signatures.
pub trait NameRender {
    /// Render a type reference (definition, by-name reference, or
    /// instantiation).
    fn render_type(&self, repo: &Repository, ty: &TypeDefOrRef, scope: &GenericArgStack)
        -> String;

    /// Render any signature shape.
    fn render_sig(&self, repo: &Repository, sig: &TypeSig, scope: &GenericArgStack) -> String;
}

/// Default renderer: dotted names with arity suffix and angle-bracketed
/// arguments, e.g. ``Windows.Foundation.Collections.IVector`1<Int32>``.
#[derive(Copy, Clone, Debug, Default)]
pub struct DisplayRenderer;

impl DisplayRenderer {
    fn render_inst(
        &self,
        repo: &Repository,
        inst: &GenericTypeInst,
        scope: &GenericArgStack,
    ) -> String {
        let args: Vec<String> = inst
            .args
            .iter()
            .map(|arg| self.render_sig(repo, arg, scope))
            .collect();
        format!("{}<{}>", repo.type_name(&inst.generic_type), args.join(", "))
    }
}

impl NameRender for DisplayRenderer {
    fn render_type(
        &self,
        repo: &Repository,
        ty: &TypeDefOrRef,
        scope: &GenericArgStack,
    ) -> String {
        match ty {
            TypeDefOrRef::Def(_) | TypeDefOrRef::Ref(_) => repo.type_name(ty).to_string(),
            TypeDefOrRef::Spec(inst) => self.render_inst(repo, inst, scope),
        }
    }

    fn render_sig(&self, repo: &Repository, sig: &TypeSig, scope: &GenericArgStack) -> String {
        match sig {
            TypeSig::Element(element) => element.clr_name().to_string(),
            TypeSig::Type(ty) => self.render_type(repo, ty, scope),
            TypeSig::GenericInst(inst) => self.render_inst(repo, inst, scope),
            TypeSig::GenericParam(index) => scope
                .arg(*index)
                .map_or_else(|| format!("T{index}"), str::to_string),
            TypeSig::Array(element) => format!("{}[]", self.render_sig(repo, element, scope)),
        }
    }
}
