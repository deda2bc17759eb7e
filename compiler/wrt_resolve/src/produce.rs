//! Producibility of exclusive interfaces.
//!
//! An interface marked exclusive to a class can only be implemented by that
//! class, so a projection normally has no reason to produce it. Two cases
//! still need it: the class lets derived types override the interface, or
//! the run is generating the class's own component implementation.

use wrt_meta::{well_known, HasAttributes, Repository, TypeDef, TypeDefOrRef, TypeName};

use crate::{GenericArgStack, NameRender, ResolveError, ResolveSettings};

/// The class an interface is exclusive to, if any.
pub fn exclusive_to(def: &TypeDef) -> Option<&TypeName> {
    def.metadata_attribute(well_known::EXCLUSIVE_TO)?
        .first_type_arg()
}

/// Whether implementations of `def` may be produced.
pub fn can_produce<R: NameRender>(
    repo: &Repository,
    renderer: &R,
    def: &TypeDef,
    settings: &ResolveSettings,
) -> Result<bool, ResolveError> {
    let Some(class_name) = exclusive_to(def) else {
        return Ok(true);
    };

    let class = repo.get(repo.find_required(class_name)?);
    let scope = GenericArgStack::new();
    let interface_name = def.name.to_string();

    let overridable = class.interface_impls.iter().any(|edge| {
        edge.has_metadata_attribute(well_known::OVERRIDABLE)
            && !matches!(edge.interface, TypeDefOrRef::Spec(_))
            && renderer.render_type(repo, &edge.interface, &scope) == interface_name
    });

    if overridable {
        return Ok(true);
    }

    Ok(settings.component && settings.component_filter.includes(&class_name.to_string()))
}

#[cfg(test)]
mod tests {
    use wrt_meta::{AttrArg, Attribute, InterfaceImpl};

    use super::*;
    use crate::{DisplayRenderer, TypeFilter};

    fn exclusive(interface: &str, class: &str) -> TypeDef {
        TypeDef::interface("Demo", interface).with_attribute(
            Attribute::metadata(well_known::EXCLUSIVE_TO)
                .with_arg(AttrArg::Type(TypeName::new("Demo", class))),
        )
    }

    fn repo() -> Repository {
        let mut repo = Repository::new();
        repo.insert(exclusive("IWidget", "Widget"));
        repo.insert(exclusive("IWidgetOverrides", "Widget"));
        repo.insert(
            TypeDef::class("Demo", "Widget")
                .implements(
                    InterfaceImpl::new(TypeDefOrRef::named("Demo", "IWidget")).default_interface(),
                )
                .implements(
                    InterfaceImpl::new(TypeDefOrRef::named("Demo", "IWidgetOverrides"))
                        .overridable(),
                ),
        );
        repo
    }

    #[test]
    fn non_exclusive_is_producible() {
        let repo = repo();
        let open = TypeDef::interface("Demo", "IOpen");
        assert_eq!(exclusive_to(&open), None);
        assert_eq!(
            can_produce(&repo, &DisplayRenderer, &open, &ResolveSettings::default()),
            Ok(true)
        );
    }

    #[test]
    fn overridable_exclusive_is_producible() {
        let repo = repo();
        let overrides = exclusive("IWidgetOverrides", "Widget");
        assert_eq!(
            can_produce(&repo, &DisplayRenderer, &overrides, &ResolveSettings::default()),
            Ok(true)
        );
    }

    #[test]
    fn plain_exclusive_needs_component_filter() {
        let repo = repo();
        let widget = exclusive("IWidget", "Widget");

        assert_eq!(
            can_produce(&repo, &DisplayRenderer, &widget, &ResolveSettings::default()),
            Ok(false)
        );

        let included = ResolveSettings::default().with_component(TypeFilter::new(["Demo"], ["Other"]));
        assert_eq!(
            can_produce(&repo, &DisplayRenderer, &widget, &included),
            Ok(true)
        );

        let excluded =
            ResolveSettings::default().with_component(TypeFilter::new(["Demo"], ["Demo.Widget"]));
        assert_eq!(
            can_produce(&repo, &DisplayRenderer, &widget, &excluded),
            Ok(false)
        );
    }

    #[test]
    fn missing_exclusive_class_is_an_error() {
        let repo = repo();
        let orphan = exclusive("IOrphan", "Gone");
        assert_eq!(
            can_produce(&repo, &DisplayRenderer, &orphan, &ResolveSettings::default()),
            Err(ResolveError::Unresolved {
                name: TypeName::new("Demo", "Gone"),
            })
        );
    }
}
