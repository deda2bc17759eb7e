//! Contract version extraction.
//!
//! Versions are packed as `major << 16 | minor` in a `u32` attribute
//! argument. `ContractVersionAttribute` carries it as its second argument
//! (after the contract name or type) or, in its single-argument form, as its
//! only argument. `VersionAttribute` carries it first. The first well-formed
//! version-bearing attribute wins.

use std::fmt;

use wrt_meta::{well_known, Attribute, HasAttributes, TypeDef, METADATA_NAMESPACE};

/// A `(major, minor)` version pair, ordered lexicographically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Unpack `major << 16 | minor`.
    #[expect(clippy::cast_possible_truncation, reason = "halves of a u32")]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            major: (packed >> 16) as u16,
            minor: (packed & 0xFFFF) as u16,
        }
    }

    pub const fn packed(self) -> u32 {
        ((self.major as u32) << 16) | self.minor as u32
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn packed_version(attribute: &Attribute) -> Option<u32> {
    if attribute.type_name.namespace() != METADATA_NAMESPACE {
        return None;
    }

    match attribute.type_name.name() {
        well_known::CONTRACT_VERSION => match attribute.args.len() {
            1 => attribute.u32_arg(0),
            _ => attribute.u32_arg(1),
        },
        well_known::VERSION => attribute.u32_arg(0),
        _ => None,
    }
}

/// The type's version, or `0.0` when it carries no version attribute.
pub fn version_of(def: &TypeDef) -> Version {
    def.attributes()
        .iter()
        .find_map(packed_version)
        .map(Version::from_packed)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wrt_meta::{AttrArg, TypeName};

    use super::*;

    #[test]
    fn unversioned_type_is_zero() {
        let def = TypeDef::interface("Demo", "IWidget");
        assert_eq!(version_of(&def), Version::new(0, 0));
    }

    #[test]
    fn contract_version_reads_second_argument() {
        let def = TypeDef::interface("Demo", "IWidget").with_attribute(
            Attribute::metadata(well_known::CONTRACT_VERSION)
                .with_arg(AttrArg::Type(TypeName::new("Demo", "WidgetContract")))
                .with_arg(AttrArg::U32(Version::new(3, 1).packed())),
        );
        assert_eq!(version_of(&def), Version::new(3, 1));
    }

    #[test]
    fn version_attribute_reads_first_argument() {
        let def = TypeDef::interface("Demo", "IWidget").with_attribute(
            Attribute::metadata(well_known::VERSION).with_arg(AttrArg::U32(0x0002_0004)),
        );
        assert_eq!(version_of(&def), Version::new(2, 4));
        assert_eq!(version_of(&def).to_string(), "2.4");
    }

    #[test]
    fn malformed_attribute_is_skipped() {
        let def = TypeDef::interface("Demo", "IWidget")
            .with_attribute(
                Attribute::metadata(well_known::VERSION).with_arg(AttrArg::String("x".into())),
            )
            .with_attribute(
                Attribute::metadata(well_known::VERSION).with_arg(AttrArg::U32(0x0001_0000)),
            );
        assert_eq!(version_of(&def), Version::new(1, 0));
    }

    #[test]
    fn versions_order_by_major_then_minor() {
        assert!(Version::new(1, 2) < Version::new(2, 0));
        assert!(Version::new(1, 0) < Version::new(1, 1));
    }
}
