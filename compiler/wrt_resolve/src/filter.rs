//! Include/exclude filter over full type names.
//!
//! Rules are name prefixes. The longest matching prefix decides; on a tie
//! an exclude beats an include. An empty filter includes everything, and a
//! non-empty filter that matches nothing excludes.

/// Prefix-based type name filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeFilter {
    /// `(prefix, include)` sorted by descending prefix length, excludes first.
    rules: Vec<(String, bool)>,
}

impl TypeFilter {
    pub fn new<I, E>(includes: I, excludes: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let mut rules: Vec<(String, bool)> = includes
            .into_iter()
            .map(|prefix| (prefix.into(), true))
            .chain(excludes.into_iter().map(|prefix| (prefix.into(), false)))
            .collect();

        rules.sort_by(|(left, left_include), (right, right_include)| {
            right
                .len()
                .cmp(&left.len())
                .then(left_include.cmp(right_include))
        });

        Self { rules }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether the full type name passes the filter.
    pub fn includes(&self, full_name: &str) -> bool {
        if self.rules.is_empty() {
            return true;
        }

        self.rules
            .iter()
            .find(|(prefix, _)| full_name.starts_with(prefix.as_str()))
            .is_some_and(|(_, include)| *include)
    }
}
