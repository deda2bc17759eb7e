//! Component metadata records.
//!
//! This crate holds the already-materialized view of a metadata repository:
//! type definitions, their interface-implementation edges, methods, fields,
//! attributes and signatures. Physical parsing of the container format is
//! not done here; producers build [`TypeDef`] records and insert them into a
//! [`Repository`].
//!
//! # Design
//!
//! - Records are plain data with public fields, immutable once inserted
//! - Types are addressed by [`TypeDefId`] (32-bit index) or by [`TypeName`]
//! - Signatures are a closed tagged union ([`TypeSig`]) so consumers can
//!   match exhaustively
//! - All records derive `Clone, Eq, Hash, Debug`; `serde` derives are
//!   available behind the `cache` feature

mod attribute;
mod error;
mod id;
mod name;
mod records;
mod repository;
mod sig;

pub use attribute::{well_known, AttrArg, Attribute, EnumArg, HasAttributes, METADATA_NAMESPACE};
pub use error::MetadataError;
pub use id::TypeDefId;
pub use name::TypeName;
pub use records::{Field, InterfaceImpl, MethodDef, MethodFlags, Param, TypeCategory, TypeDef};
pub use repository::Repository;
pub use sig::{ElementType, GenericTypeInst, MethodSig, ParamSig, TypeDefOrRef, TypeSig};
