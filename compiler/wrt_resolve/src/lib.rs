//! Interface-surface resolution for component metadata.
//!
//! Given a loaded [`Repository`](wrt_meta::Repository), this crate answers
//! the questions a binding generator asks about each type before it emits
//! anything:
//!
//! - which interfaces a type exposes, with per-interface flags
//!   ([`InterfaceResolver`])
//! - how a fast-ABI class lays those interfaces out ([`fastabi`])
//! - how a method signature should be projected ([`MethodSignature`])
//! - what kind of value a signature carries ([`categorize`])
//! - which activation, static and composition contracts a class offers
//!   ([`factories`])
//! - whether feature gates rule a type in or out ([`is_always_disabled`])
//!
//! [`Projection`] bundles a repository, a [`NameRender`] and
//! [`ResolveSettings`] into a single per-run entry point.
//!
//! # Design
//!
//! - Read-only over the repository; every query returns fresh owned data
//! - Names are rendered through the [`NameRender`] seam so callers choose
//!   the textual form ([`DisplayRenderer`] is the default)
//! - Failures are values ([`ResolveError`]), never panics

mod bases;
mod category;
mod context;
mod error;
mod factory;
pub mod fastabi;
mod feature;
mod filter;
mod generics;
mod interfaces;
mod produce;
mod render;
mod settings;
mod signature;
mod stack;
mod version;

pub use bases::{base_class, bases, default_interface, implements_interface};
pub use category::{categorize, is_object, Categorized, ParamCategory};
pub use context::Projection;
pub use error::ResolveError;
pub use factory::{
    factories, has_composable_constructors, has_factory_members, is_composable, Factories,
    FactoryInfo,
};
pub use feature::{
    feature_stage, has_fastabi, is_always_disabled, is_always_enabled, FeatureStage,
};
pub use filter::TypeFilter;
pub use generics::{ArgNames, GenericArgStack};
pub use interfaces::{InterfaceInfo, InterfaceResolver, ResolvedInterfaces};
pub use produce::{can_produce, exclusive_to};
pub use render::{DisplayRenderer, NameRender};
pub use settings::ResolveSettings;
pub use signature::{
    delegate_invoke, is_async_shape, AccessorKind, MethodSignature, DEFAULT_RETURN_NAME,
};
pub use stack::ensure_sufficient_stack;
pub use version::{version_of, Version};
