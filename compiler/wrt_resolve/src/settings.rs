//! Per-run resolution settings.
//!
//! Settings are passed explicitly to every top-level call instead of living
//! in process-wide state, so two resolutions with different settings can
//! run side by side.

use crate::TypeFilter;

/// Options that change resolution results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveSettings {
    /// Honor `FastAbiAttribute` when laying out interfaces.
    pub fastabi: bool,

    /// Report every type as "not always disabled", regardless of its
    /// feature stage.
    pub component_ignore_velocity: bool,

    /// Generating a component implementation (enables `component_filter`
    /// for exclusive interfaces).
    pub component: bool,

    /// Classes whose exclusive interfaces may be produced in component mode.
    pub component_filter: TypeFilter,
}

impl ResolveSettings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fastabi(mut self, enabled: bool) -> Self {
        self.fastabi = enabled;
        self
    }

    #[must_use]
    pub fn with_ignore_velocity(mut self, ignore: bool) -> Self {
        self.component_ignore_velocity = ignore;
        self
    }

    #[must_use]
    pub fn with_component(mut self, filter: TypeFilter) -> Self {
        self.component = true;
        self.component_filter = filter;
        self
    }
}
