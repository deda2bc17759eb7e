//! Fast-ABI interface layout.
//!
//! Classes marked `FastAbiAttribute` get a compact dispatch table whose
//! leading slots belong to a fixed prefix of the class's own interfaces.
//! The prefix holds as many entries as there are interfaces that are own
//! (not base), exclusive, and not overridable. It is filled with the least
//! entries under the layout key below, in key order; every other entry
//! keeps its discovery order after it.
//!
//! Layout key, highest priority first:
//!
//! 1. own before base (each base's default then clusters together)
//! 2. default before non-default
//! 3. non-overridable before overridable
//! 4. exclusive before non-exclusive
//! 5. always-enabled before feature-gated
//! 6. ascending version
//! 7. ascending rendered name

use wrt_meta::{Repository, TypeDef};

use crate::bases::bases;
use crate::feature::{has_fastabi, is_always_enabled};
use crate::{InterfaceInfo, ResolveError, ResolveSettings, ResolvedInterfaces};

/// Fixed slots ahead of the first interface: the object's own vtable
/// header (three `IUnknown` and three `IInspectable` methods).
const HEADER_SLOTS: usize = 6;

fn is_prefix_eligible(info: &InterfaceInfo) -> bool {
    info.exclusive && !info.base && !info.overridable
}

/// Order `interfaces` for fast-ABI layout and mark the prefix.
///
/// With `enabled == false` the input is left exactly as resolved.
#[tracing::instrument(level = "debug", skip_all, fields(enabled = enabled))]
pub fn order(repo: &Repository, interfaces: &mut ResolvedInterfaces, enabled: bool) {
    if !enabled {
        return;
    }

    let prefix_count = interfaces
        .iter()
        .filter(|(_, info)| is_prefix_eligible(info))
        .count();

    let entries = interfaces.take_entries();
    let enabled_flags: Vec<bool> = entries
        .iter()
        .map(|(_, info)| is_always_enabled(repo, repo.get(info.ty)))
        .collect();

    let mut ranked: Vec<usize> = (0..entries.len()).collect();
    ranked.sort_by_key(|&i| {
        let (name, info) = &entries[i];
        (
            info.base,
            !info.is_default,
            info.overridable,
            !info.exclusive,
            !enabled_flags[i],
            info.version,
            name.as_str(),
        )
    });

    let mut in_prefix = vec![false; entries.len()];
    for &i in &ranked[..prefix_count] {
        in_prefix[i] = true;
    }

    let mut slots: Vec<Option<(String, InterfaceInfo)>> = entries.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(slots.len());

    for &i in &ranked[..prefix_count] {
        if let Some((name, mut info)) = slots[i].take() {
            info.fastabi = true;
            ordered.push((name, info));
        }
    }
    for (i, slot) in slots.iter_mut().enumerate() {
        if in_prefix[i] {
            continue;
        }
        if let Some(entry) = slot.take() {
            ordered.push(entry);
        }
    }

    tracing::debug!(prefix_count, "fast-ABI prefix ordered");
    interfaces.reorder(ordered);
}

/// Number of dispatch slots in the class's fast-ABI table, or 0 when the
/// class does not use fast-ABI layout.
///
/// `interfaces` must already be [`order`]ed for this class.
pub fn slot_count(
    repo: &Repository,
    def: &TypeDef,
    interfaces: &ResolvedInterfaces,
    settings: &ResolveSettings,
) -> Result<usize, ResolveError> {
    if !has_fastabi(def, settings) {
        return Ok(0);
    }

    let methods: usize = interfaces
        .iter()
        .take_while(|(_, info)| info.fastabi)
        .map(|(_, info)| repo.get(info.ty).methods.len())
        .sum();

    Ok(HEADER_SLOTS + bases(repo, def)?.len() + methods)
}

/// Whether the first non-default interface sits in the fast-ABI prefix,
/// meaning the class needs fast-ABI tear-offs.
pub fn has_fastabi_tearoffs(interfaces: &ResolvedInterfaces) -> bool {
    interfaces
        .iter()
        .find(|(_, info)| !info.is_default)
        .is_some_and(|(_, info)| info.fastabi)
}
