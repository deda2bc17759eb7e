use pretty_assertions::assert_eq;
use wrt_meta::{GenericTypeInst, TypeDef, TypeName};

use super::*;

fn repo() -> Repository {
    let mut repo = Repository::new();
    repo.insert(TypeDef::interface("Demo", "IWidget"));
    repo.insert(TypeDef::class("Demo", "Widget"));
    repo.insert(TypeDef::new(TypeCategory::Delegate, "Demo", "WidgetHandler"));
    repo.insert(TypeDef::new(TypeCategory::Struct, "Demo", "Point"));
    repo.insert(TypeDef::new(TypeCategory::Enum, "Demo", "Orientation"));
    repo
}

fn category(repo: &Repository, sig: &TypeSig) -> ParamCategory {
    match categorize(repo, sig) {
        Ok(categorized) => categorized.category,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn primitives() {
    let repo = repo();

    assert_eq!(
        category(&repo, &TypeSig::Element(ElementType::String)),
        ParamCategory::String
    );
    assert_eq!(
        category(&repo, &TypeSig::Element(ElementType::Object)),
        ParamCategory::Object
    );
    for element in [ElementType::Boolean, ElementType::Char, ElementType::I4, ElementType::R8] {
        assert_eq!(
            category(&repo, &TypeSig::Element(element)),
            ParamCategory::Fundamental,
            "expected Fundamental for {element:?}",
        );
    }
}

#[test]
fn arrays_win_over_element_shape() {
    let repo = repo();
    let sig = TypeSig::array_of(TypeSig::Element(ElementType::String));
    assert_eq!(category(&repo, &sig), ParamCategory::Array);
}

#[test]
fn nominal_types_follow_definition_kind() {
    let repo = repo();

    for (name, expected) in [
        ("IWidget", ParamCategory::Object),
        ("Widget", ParamCategory::Object),
        ("WidgetHandler", ParamCategory::Object),
        ("Point", ParamCategory::Struct),
        ("Orientation", ParamCategory::Enum),
    ] {
        let sig = TypeSig::named("Demo", name);
        let result = categorize(&repo, &sig);
        assert_eq!(
            result.map(|c| c.category),
            Ok(expected),
            "unexpected category for {name}"
        );
        assert_eq!(
            categorize(&repo, &sig).ok().and_then(|c| c.definition),
            repo.find(&TypeName::new("Demo", name))
        );
    }
}

#[test]
fn guid_is_struct_without_definition() {
    let repo = repo();
    let categorized = categorize(&repo, &TypeSig::named("System", "Guid"));
    assert_eq!(
        categorized,
        Ok(Categorized {
            category: ParamCategory::Struct,
            definition: None,
        })
    );
}

#[test]
fn instantiations_are_objects_and_params_are_generic() {
    let repo = repo();
    let inst = TypeSig::GenericInst(GenericTypeInst::new(
        TypeDefOrRef::named("Windows.Foundation.Collections", "IVector`1"),
        vec![TypeSig::Element(ElementType::I4)],
    ));

    assert_eq!(category(&repo, &inst), ParamCategory::Object);
    assert_eq!(category(&repo, &TypeSig::GenericParam(0)), ParamCategory::Generic);
}

#[test]
fn unresolved_reference_is_an_error() {
    let repo = repo();
    assert_eq!(
        categorize(&repo, &TypeSig::named("Demo", "Missing")),
        Err(ResolveError::Unresolved {
            name: TypeName::new("Demo", "Missing"),
        })
    );
}

#[test]
fn is_object_only_for_object_primitive() {
    assert!(is_object(&TypeSig::Element(ElementType::Object)));
    assert!(!is_object(&TypeSig::named("Demo", "IWidget")));
}
