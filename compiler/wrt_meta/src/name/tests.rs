use pretty_assertions::assert_eq;

use super::*;

#[test]
fn parse_splits_at_last_dot() {
    let name = TypeName::parse("Windows.Foundation.IAsyncAction");
    assert_eq!(name.namespace(), "Windows.Foundation");
    assert_eq!(name.name(), "IAsyncAction");
}

#[test]
fn parse_without_namespace() {
    let name = TypeName::parse("Widget");
    assert_eq!(name.namespace(), "");
    assert_eq!(name.name(), "Widget");
    assert_eq!(name.to_string(), "Widget");
}

#[test]
fn display_round_trips_full_name() {
    let name = TypeName::new("Windows.Foundation.Collections", "IVector`1");
    assert_eq!(name.to_string(), "Windows.Foundation.Collections.IVector`1");
    assert_eq!(TypeName::parse(&name.to_string()), name);
}

#[test]
fn well_known_system_names() {
    assert!(TypeName::new("System", "Object").is_system_object());
    assert!(TypeName::new("System", "Guid").is_system_guid());
    assert!(!TypeName::new("Windows", "Object").is_system_object());
}
