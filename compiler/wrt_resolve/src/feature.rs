//! Feature gate evaluation.
//!
//! A type's build-time enablement is read from its `FeatureAttribute`, whose
//! first enum argument is the feature stage. The stage name comes from the
//! stage enum's definition when it is loaded; otherwise the well-known
//! numeric values are used. A missing or malformed attribute is treated as
//! "no feature gate", which means enabled.

use wrt_meta::{well_known, EnumArg, HasAttributes, Repository, TypeDef};

use crate::ResolveSettings;

/// Build-time enablement stage of a gated type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FeatureStage {
    AlwaysDisabled,
    DisabledByDefault,
    EnabledByDefault,
    AlwaysEnabled,
}

impl FeatureStage {
    fn from_enumerator(name: &str) -> Option<Self> {
        match name {
            "AlwaysDisabled" => Some(Self::AlwaysDisabled),
            "DisabledByDefault" => Some(Self::DisabledByDefault),
            "EnabledByDefault" => Some(Self::EnabledByDefault),
            "AlwaysEnabled" => Some(Self::AlwaysEnabled),
            _ => None,
        }
    }

    fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::AlwaysDisabled),
            1 => Some(Self::DisabledByDefault),
            2 => Some(Self::EnabledByDefault),
            3 => Some(Self::AlwaysEnabled),
            _ => None,
        }
    }
}

fn stage_arg(def: &TypeDef) -> Option<&EnumArg> {
    def.metadata_attribute(well_known::FEATURE)?.first_enum_arg()
}

fn stage_of(repo: &Repository, arg: &EnumArg) -> Option<FeatureStage> {
    match repo.enumerator_name(arg) {
        Some(name) => FeatureStage::from_enumerator(name),
        None => FeatureStage::from_value(arg.value),
    }
}

/// The type's feature stage, or `None` if it is not gated.
pub fn feature_stage(repo: &Repository, def: &TypeDef) -> Option<FeatureStage> {
    stage_of(repo, stage_arg(def)?)
}

/// Whether the type is compiled out in every build.
///
/// Always `false` when `settings.component_ignore_velocity` is set.
pub fn is_always_disabled(repo: &Repository, def: &TypeDef, settings: &ResolveSettings) -> bool {
    if settings.component_ignore_velocity {
        return false;
    }

    feature_stage(repo, def) == Some(FeatureStage::AlwaysDisabled)
}

/// Whether the type is available in every build. Ungated types are.
pub fn is_always_enabled(repo: &Repository, def: &TypeDef) -> bool {
    match stage_arg(def) {
        None => true,
        Some(arg) => stage_of(repo, arg) == Some(FeatureStage::AlwaysEnabled),
    }
}

/// Whether the type asks for fast-ABI layout and the run honors it.
pub fn has_fastabi(def: &TypeDef, settings: &ResolveSettings) -> bool {
    settings.fastabi && def.has_metadata_attribute(well_known::FAST_ABI)
}

#[cfg(test)]
mod tests;
