use pretty_assertions::assert_eq;
use wrt_meta::{AttrArg, EnumArg, MethodDef, TypeName, METADATA_NAMESPACE};

use super::*;
use crate::DisplayRenderer;

fn activatable(factory: Option<&str>) -> Attribute {
    let attribute = Attribute::metadata(well_known::ACTIVATABLE);
    let attribute = match factory {
        Some(name) => attribute.with_arg(AttrArg::Type(TypeName::parse(name))),
        None => attribute,
    };
    attribute.with_arg(AttrArg::U32(0x0001_0000))
}

fn composable(factory: &str, visibility: i32) -> Attribute {
    Attribute::metadata(well_known::COMPOSABLE)
        .with_arg(AttrArg::Type(TypeName::parse(factory)))
        .with_arg(AttrArg::Enum(EnumArg {
            enum_type: TypeName::new(METADATA_NAMESPACE, "CompositionType"),
            value: visibility,
        }))
        .with_arg(AttrArg::U32(0x0001_0000))
}

fn repo() -> Repository {
    let mut repo = Repository::new();
    repo.insert(
        TypeDef::interface("Demo", "IWidgetFactory").with_method(MethodDef::new("CreateInstance")),
    );
    repo.insert(TypeDef::interface("Demo", "IWidgetStatics"));
    repo.insert(TypeDef::interface("Demo", "IWidgetComposer"));
    repo
}

#[test]
fn discovers_each_contract_shape() {
    let repo = repo();
    let widget = TypeDef::class("Demo", "Widget")
        .with_attribute(activatable(None))
        .with_attribute(activatable(Some("Demo.IWidgetFactory")))
        .with_attribute(
            Attribute::metadata(well_known::STATIC)
                .with_arg(AttrArg::Type(TypeName::new("Demo", "IWidgetStatics"))),
        )
        .with_attribute(composable("Demo.IWidgetComposer", 2));

    let factories = factories(&repo, &DisplayRenderer, &widget).unwrap_or_default();
    let keys: Vec<&str> = factories.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["", "Demo.IWidgetComposer", "Demo.IWidgetFactory", "Demo.IWidgetStatics"]
    );

    assert_eq!(
        factories[""],
        FactoryInfo {
            ty: None,
            activatable: true,
            ..FactoryInfo::default()
        }
    );
    assert!(factories["Demo.IWidgetStatics"].statics);
    assert!(factories["Demo.IWidgetComposer"].composable);
    assert!(factories["Demo.IWidgetComposer"].visible);
    assert_eq!(
        factories["Demo.IWidgetFactory"].ty,
        repo.find(&TypeName::new("Demo", "IWidgetFactory"))
    );
}

#[test]
fn protected_composition_is_not_visible() {
    let repo = repo();
    let widget =
        TypeDef::class("Demo", "Widget").with_attribute(composable("Demo.IWidgetComposer", 1));

    let factories = factories(&repo, &DisplayRenderer, &widget).unwrap_or_default();
    assert!(!factories["Demo.IWidgetComposer"].visible);
    assert!(is_composable(&factories));
    assert!(!has_composable_constructors(&repo, &factories));
}

#[test]
fn last_writer_wins() {
    let repo = repo();
    let widget = TypeDef::class("Demo", "Widget")
        .with_attribute(activatable(Some("Demo.IWidgetFactory")))
        .with_attribute(
            Attribute::metadata(well_known::STATIC)
                .with_arg(AttrArg::Type(TypeName::new("Demo", "IWidgetFactory"))),
        );

    let factories = factories(&repo, &DisplayRenderer, &widget).unwrap_or_default();
    assert_eq!(factories.len(), 1);
    let info = &factories["Demo.IWidgetFactory"];
    assert!(info.statics);
    assert!(!info.activatable);
}

#[test]
fn ignores_unrelated_attributes() {
    let repo = repo();
    let widget = TypeDef::class("Demo", "Widget")
        .with_attribute(Attribute::metadata(well_known::FAST_ABI))
        .with_attribute(Attribute::new(TypeName::new("Other", "ActivatableAttribute")));

    assert_eq!(factories(&repo, &DisplayRenderer, &widget), Ok(Factories::new()));
}

#[test]
fn unresolved_factory_type_is_an_error() {
    let repo = repo();
    let widget =
        TypeDef::class("Demo", "Widget").with_attribute(activatable(Some("Demo.IGoneFactory")));

    assert_eq!(
        factories(&repo, &DisplayRenderer, &widget),
        Err(ResolveError::Unresolved {
            name: TypeName::new("Demo", "IGoneFactory"),
        })
    );
}

#[test]
fn factory_member_queries() {
    let repo = repo();
    let implicit = factories(
        &repo,
        &DisplayRenderer,
        &TypeDef::class("Demo", "A").with_attribute(activatable(None)),
    )
    .unwrap_or_default();
    let empty_statics = factories(
        &repo,
        &DisplayRenderer,
        &TypeDef::class("Demo", "B").with_attribute(
            Attribute::metadata(well_known::STATIC)
                .with_arg(AttrArg::Type(TypeName::new("Demo", "IWidgetStatics"))),
        ),
    )
    .unwrap_or_default();
    let with_methods = factories(
        &repo,
        &DisplayRenderer,
        &TypeDef::class("Demo", "C").with_attribute(composable("Demo.IWidgetFactory", 2)),
    )
    .unwrap_or_default();

    assert!(has_factory_members(&repo, &implicit));
    assert!(!has_factory_members(&repo, &empty_statics));
    assert!(has_factory_members(&repo, &with_methods));
    assert!(has_composable_constructors(&repo, &with_methods));
    assert!(!is_composable(&implicit));
}
